//! Argument processing for ordinal-pick CLI.
//!
//! This module turns command-line arguments into the inputs of the prompt:
//! - **Answers**: `-a key=value` pairs that feed conditionally disabled choices
//! - **Overrides**: options that replace fields of the prompt definition file
//! - **Setup**: the prompt, answers and theme ready for the event loop

// Export public items from submodules
pub mod answers;
pub mod overrides;
pub mod setup;

// Re-exports for convenience
pub use answers::parse_answers;
pub use overrides::{apply_overrides, choices_from_args};
pub use setup::{prepare_prompt, PreparedPrompt};
