use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ordinal_pick_core::state::Event;

/// What a key press means to the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Prompt(Event),
    /// Abandon the prompt (Esc or Ctrl-C).
    Cancel,
    Ignore,
}

/// Decodes a terminal key event into a prompt event.
///
/// Arrows, vi-style `k`/`j` and emacs-style `Ctrl-P`/`Ctrl-N` move the cursor;
/// space toggles, `1`-`9` jump and toggle, `r` resets and Enter submits.
/// Anything else is ignored.
#[must_use]
pub fn decode_key(key_event: KeyEvent) -> KeyAction {
    if key_event.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if ctrl => KeyAction::Cancel,
        KeyCode::Char('p') if ctrl => KeyAction::Prompt(Event::MoveUp),
        KeyCode::Char('n') if ctrl => KeyAction::Prompt(Event::MoveDown),
        _ if ctrl => KeyAction::Ignore,
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Prompt(Event::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Prompt(Event::MoveDown),
        KeyCode::Char(' ') => KeyAction::Prompt(Event::ToggleAtCursor),
        KeyCode::Char('r') => KeyAction::Prompt(Event::Reset),
        KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
            Some(number) => KeyAction::Prompt(Event::SelectByNumber(number as usize)),
            None => KeyAction::Ignore,
        },
        KeyCode::Enter => KeyAction::Prompt(Event::Submit),
        _ => KeyAction::Ignore,
    }
}
