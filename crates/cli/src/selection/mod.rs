//! Terminal front end for the ordinal prompt.
//!
//! The core crate renders frames as plain styled spans; this module decodes
//! key presses into prompt events, maps span styles to terminal colors and
//! redraws the frame in place on stderr.
//!
//! # Key Bindings
//!
//! - Arrow keys, `k`/`j` or `Ctrl-P`/`Ctrl-N` to move
//! - Space to toggle the choice under the cursor
//! - `1`-`9` to toggle a choice by its position
//! - `r` to clear the selection
//! - Enter to submit, Escape or `Ctrl-C` to cancel

pub mod colors;
pub mod input;
pub mod ui;

// Re-exports for convenience
pub use colors::Theme;
pub use input::{decode_key, KeyAction};
pub use ui::{draw_frame, prompt_for_ordered_choices};
