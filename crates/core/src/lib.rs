//! Ordinal Pick Core Library
//!
//! This crate provides the core of ordinal-pick, a terminal prompt that lets a
//! user select a subset of items from a list and put them in order. The number
//! shown next to a selected item is the order in which it was picked, not its
//! position in the list.
//!
//! # Key Features
//!
//! - **Selection State Machine**: Pure transitions for moving, toggling, numeric shortcuts,
//!   reset and submit, with disabled and separator rows skipped
//! - **Rendering**: Styled text frames with ordinals, pointer, disabled rows and a
//!   scroll-preserving paginator
//! - **Prompt Definitions**: YAML files describing choices, defaults and selection bounds
//! - **Error Handling**: Error types for configuration and terminal failures
//!
//! # Examples
//!
//! ```
//! use ordinal_pick_core::choices::{Answers, Item};
//! use ordinal_pick_core::prompt::{OrdinalPrompt, Outcome, PromptConfig};
//! use ordinal_pick_core::state::Event;
//!
//! let config = PromptConfig {
//!     message: "Rank these".to_string(),
//!     choices: Some(["A", "B", "C"].into_iter().map(Item::new).collect()),
//!     ..PromptConfig::default()
//! };
//! let answers = Answers::new();
//! let mut prompt = OrdinalPrompt::new(config, &answers)?;
//!
//! prompt.handle(Event::MoveDown, &answers);
//! prompt.handle(Event::ToggleAtCursor, &answers);
//! prompt.handle(Event::MoveUp, &answers);
//! prompt.handle(Event::ToggleAtCursor, &answers);
//!
//! let outcome = prompt.handle(Event::Submit, &answers);
//! assert_eq!(outcome, Outcome::Answered(vec!["B".to_string(), "A".to_string()]));
//! # Ok::<(), ordinal_pick_core::error::Error>(())
//! ```

pub mod choices;
pub mod config;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod paginator;
pub mod prompt;
pub mod render;
pub mod state;
