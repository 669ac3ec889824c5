use ordinal_pick_core::choices::{ChoiceList, Item};
use ordinal_pick_core::definitions::PromptDefinition;

use crate::cli_args::Args;

/// Message used when neither the file nor the command line sets one.
pub const DEFAULT_MESSAGE: &str = "Select in order:";

/// Applies the command-line options on top of the definition file.
///
/// Options that were not given keep the file's value.
#[must_use]
pub fn apply_overrides(args: &Args, definition: Option<PromptDefinition>) -> PromptDefinition {
    let mut definition = definition.unwrap_or_default();

    if let Some(message) = &args.message {
        definition.message = Some(message.clone());
    }

    if definition.message.is_none() {
        definition.message = Some(DEFAULT_MESSAGE.to_string());
    }

    if !args.defaults.is_empty() {
        definition.default = Some(args.defaults.clone());
    }

    if args.page_size.is_some() {
        definition.page_size = args.page_size;
    }

    if args.min_selected.is_some() {
        definition.min_selected = args.min_selected;
    }

    if args.max_selected.is_some() {
        definition.max_selected = args.max_selected;
    }

    definition
}

/// Positional choices, if any were given.
#[must_use]
pub fn choices_from_args(choices: &[String]) -> Option<ChoiceList<String>> {
    if choices.is_empty() {
        return None;
    }

    Some(choices.iter().map(|name| Item::new(name.as_str())).collect())
}
