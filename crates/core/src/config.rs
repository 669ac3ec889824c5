//! Configuration path utilities for ordinal-pick.
//!
//! This module provides functions for resolving the prompt definition path
//! and expanding shell variables like `~` in paths.

/// Default path for the prompt definition file
pub const DEFAULT_DEFINITION_PATH: &str = "~/.ordinal-pick/prompt.yml";

/// Resolves the prompt definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// definition path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use ordinal_pick_core::config::get_definition_path;
///
/// let custom_path = get_definition_path(&Some("/path/to/prompt.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/prompt.yml");
/// ```
#[must_use]
pub fn get_definition_path(definition_path_arg: &Option<String>) -> String {
    let definition_path = match definition_path_arg {
        Some(definition_path) => definition_path,
        None => DEFAULT_DEFINITION_PATH,
    };

    shellexpand::tilde(definition_path).to_string()
}
