//! Rendering of the ordinal prompt into a styled text frame.
//!
//! [`render`] is a pure function of the choice list, the selection state, the
//! answers context and the previous [`Viewport`]. It produces a [`Frame`] of
//! lines made of [`Span`]s tagged with a [`SpanStyle`]; the host decides how
//! each style looks on the terminal. The plain text is available through
//! `Display`.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::choices::{Answers, Choice, ChoiceList, Item};
use crate::paginator::{paginate, Viewport};
use crate::state::SelectionState;

pub const POINTER: &str = "❯";
pub const UNCHECKED: &str = "◯";
pub const PAGINATION_HINT: &str = "(Move up and down to reveal more choices)";
pub const ERROR_PREFIX: &str = ">> ";

/// Default number of choice lines shown at once.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Semantic style of a span. The host maps these to terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    Plain,
    Prefix,
    Message,
    /// A key name inside the help tip.
    HelpKey,
    /// The final answer shown once the prompt is answered.
    Answer,
    Pointer,
    /// Text of the row under the cursor.
    Highlighted,
    Ordinal,
    Unchecked,
    Disabled,
    Separator,
    Hint,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    #[must_use]
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

/// A full redraw of the prompt.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.iter().join("\n"))
    }
}

/// Static presentation settings for one prompt.
#[derive(Clone, Debug)]
pub struct RenderOptions<'a> {
    pub prefix: &'a str,
    pub message: &'a str,
    pub page_size: usize,
    /// Validation message shown beneath the body.
    pub error: Option<&'a str>,
}

/// Renders `state` and returns the frame with the viewport to pass to the
/// next call.
#[must_use]
pub fn render<T: PartialEq + Display>(
    choices: &ChoiceList<T>,
    state: &SelectionState<T>,
    answers: &Answers,
    options: &RenderOptions<'_>,
    viewport: Viewport,
) -> (Frame, Viewport) {
    let mut header = vec![
        Span::new(options.prefix, SpanStyle::Prefix),
        Span::plain(" "),
        Span::new(options.message, SpanStyle::Message),
    ];

    if state.is_answered() {
        let answer = state.selected_values.iter().join(", ");
        header.push(Span::plain(" "));
        header.push(Span::new(answer, SpanStyle::Answer));

        let frame = Frame {
            lines: vec![Line::new(header)],
        };
        return (frame, viewport);
    }

    if state.show_help_tip {
        header.extend(help_tip());
    }

    let body = render_choices(choices, state, answers);
    let active_line = choices.row_of(state.cursor_position).unwrap_or(0);
    let page = paginate(&body, active_line, options.page_size, viewport);

    let mut lines = vec![Line::new(header)];
    lines.extend(page.lines);

    if page.is_paginated {
        lines.push(Line::new(vec![Span::new(PAGINATION_HINT, SpanStyle::Hint)]));
    }

    if let Some(error) = options.error {
        lines.push(Line::new(vec![
            Span::new(ERROR_PREFIX, SpanStyle::Error),
            Span::plain(error),
        ]));
    }

    (Frame { lines }, page.viewport)
}

fn help_tip() -> Vec<Span> {
    vec![
        Span::plain(" (Press "),
        Span::new("<space>", SpanStyle::HelpKey),
        Span::plain(" to select, "),
        Span::new("<r>", SpanStyle::HelpKey),
        Span::plain(" to reset)"),
    ]
}

/// One line per row of the list, separators and disabled rows included.
fn render_choices<T: PartialEq>(
    choices: &ChoiceList<T>,
    state: &SelectionState<T>,
    answers: &Answers,
) -> Vec<Line> {
    let mut pointer = 0;

    choices
        .iter()
        .map(|choice| match choice {
            Choice::Separator(separator) => Line::new(vec![Span::new(
                format!(" {separator}"),
                SpanStyle::Separator,
            )]),
            Choice::Item(item) => {
                let is_cursor = pointer == state.cursor_position;
                pointer += 1;
                render_item(item, state, answers, is_cursor)
            }
        })
        .collect()
}

fn render_item<T: PartialEq>(
    item: &Item<T>,
    state: &SelectionState<T>,
    answers: &Answers,
    is_cursor: bool,
) -> Line {
    if let Some(reason) = item.disabled_status(answers).reason() {
        return Line::new(vec![Span::new(
            format!(" - {} ({reason})", item.name),
            SpanStyle::Disabled,
        )]);
    }

    let ordinal = match state.selected_values.iter().position(|v| *v == item.value) {
        Some(index) => Span::new((index + 1).to_string(), SpanStyle::Ordinal),
        None => Span::new(UNCHECKED, SpanStyle::Unchecked),
    };

    if is_cursor {
        Line::new(vec![
            Span::new(POINTER, SpanStyle::Pointer),
            ordinal,
            Span::new(format!(" {}", item.name), SpanStyle::Highlighted),
        ])
    } else {
        Line::new(vec![
            Span::plain(" "),
            ordinal,
            Span::plain(format!(" {}", item.name)),
        ])
    }
}
