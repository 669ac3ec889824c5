use std::io::{stderr, Write};

use crossterm::cursor::{self, MoveToColumn, MoveToPreviousLine};
use crossterm::event::{self, Event as TermEvent};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};
use log::{debug, info};
use unicode_width::UnicodeWidthStr;

use super::colors::Theme;
use super::input::{decode_key, KeyAction};
use ordinal_pick_core::choices::Answers;
use ordinal_pick_core::error::{Error, Result};
use ordinal_pick_core::prompt::{OrdinalPrompt, Outcome};
use ordinal_pick_core::render::{Frame, Line};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode and show the cursor again on drop
        let _ = disable_raw_mode();
        let _ = execute!(stderr(), cursor::Show);
    }
}

/// Terminal rows taken by `line` when it wraps at `width` columns.
fn rows_for_line(line: &Line, width: u16) -> u16 {
    let columns: usize = line
        .spans
        .iter()
        .map(|span| UnicodeWidthStr::width(span.text.as_str()))
        .sum();

    if width == 0 || columns == 0 {
        return 1;
    }

    u16::try_from(columns.div_ceil(usize::from(width))).unwrap_or(u16::MAX)
}

/// Terminal rows taken by `frame` on a `(width, height)` screen. A frame taller
/// than the screen scrolls, so at most `height` rows can be drawn over again.
#[must_use]
pub fn rows_for_frame(frame: &Frame, (width, height): (u16, u16)) -> u16 {
    let rows = frame
        .lines
        .iter()
        .fold(0u16, |rows, line| rows.saturating_add(rows_for_line(line, width)));

    if height == 0 {
        rows
    } else {
        rows.min(height)
    }
}

/// Draws `frame` in place of the previous one and returns how many terminal
/// rows it occupies.
///
/// The frame is drawn inline below the shell prompt. `previous_rows` is the
/// value returned by the last call (0 for the first frame); the cursor is
/// expected at the end of that frame. `screen` is the terminal `(width,
/// height)`, used to count rows for lines that wrap.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn draw_frame<W: Write>(
    out: &mut W,
    frame: &Frame,
    theme: &Theme,
    previous_rows: u16,
    screen: (u16, u16),
) -> Result<u16> {
    if previous_rows > 1 {
        queue!(out, MoveToPreviousLine(previous_rows - 1))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

    for (i, line) in frame.lines.iter().enumerate() {
        if i > 0 {
            // Raw mode does not translate `\n`
            queue!(out, Print("\r\n"))?;
        }

        for span in &line.spans {
            let style = theme.style_for(span.style);
            if let Some(color) = style.foreground {
                queue!(out, SetForegroundColor(color))?;
            }
            for attribute in &style.attributes {
                queue!(out, SetAttribute(*attribute))?;
            }

            queue!(out, Print(&span.text))?;

            if style.foreground.is_some() || !style.attributes.is_empty() {
                queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
    }

    out.flush()?;

    Ok(rows_for_frame(frame, screen))
}

/// Runs the prompt until it is answered or cancelled.
///
/// Frames are written to stderr so stdout stays free for the answer.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] on Esc or Ctrl-C, or a terminal I/O error.
pub fn prompt_for_ordered_choices(
    prompt: &mut OrdinalPrompt<String>,
    answers: &Answers,
    theme: &Theme,
) -> Result<Vec<String>> {
    let mut out = stderr();

    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled
    queue!(out, cursor::Hide)?;

    let mut screen = terminal::size()?;
    let mut drawn_rows = draw_frame(&mut out, &prompt.render(answers), theme, 0, screen)?;

    loop {
        match event::read()? {
            TermEvent::Key(key_event) => match decode_key(key_event) {
                KeyAction::Ignore => {}
                KeyAction::Cancel => {
                    info!("Prompt cancelled by user");
                    queue!(out, Print("\r\n"))?;
                    out.flush()?;
                    return Err(Error::Cancelled);
                }
                KeyAction::Prompt(prompt_event) => {
                    let outcome = prompt.handle(prompt_event, answers);
                    let frame = prompt.render(answers);
                    drawn_rows = draw_frame(&mut out, &frame, theme, drawn_rows, screen)?;

                    if let Outcome::Answered(values) = outcome {
                        debug!("Answered with {} value(s)", values.len());
                        queue!(out, Print("\r\n"))?;
                        out.flush()?;
                        return Ok(values);
                    }
                }
            },
            TermEvent::Resize(width, height) => {
                // The old frame may or may not have reflowed to the new width
                let frame = prompt.render(answers);
                let previous = rows_for_frame(&frame, (width, height)).max(drawn_rows.min(height));
                screen = (width, height);
                drawn_rows = draw_frame(&mut out, &frame, theme, previous, screen)?;
            }
            _ => {}
        }
    }
}
