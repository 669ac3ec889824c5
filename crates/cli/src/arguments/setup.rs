use log::debug;
use ordinal_pick_core::choices::Answers;
use ordinal_pick_core::definitions::PromptDefinition;
use ordinal_pick_core::error::Result;
use ordinal_pick_core::prompt::OrdinalPrompt;

use super::{apply_overrides, choices_from_args, parse_answers};
use crate::cli_args::Args;
use crate::selection::Theme;

/// Everything the event loop needs to run one prompt.
pub struct PreparedPrompt {
    pub prompt: OrdinalPrompt<String>,
    pub answers: Answers,
    pub theme: Theme,
}

/// Builds the prompt from the command line and the optional definition file.
///
/// # Errors
///
/// Returns an error if an answer is malformed, the definition is invalid, or
/// no choices were given anywhere.
pub fn prepare_prompt(args: &Args, definition: Option<PromptDefinition>) -> Result<PreparedPrompt> {
    let answers = parse_answers(&args.answers)?;
    let definition = apply_overrides(args, definition);
    debug!("Prompt definition after overrides: {definition:?}");

    let config = definition.to_config(choices_from_args(&args.choices))?;
    let mut prompt = OrdinalPrompt::new(config, &answers)?;

    if let Some(validator) = definition.validator()? {
        prompt = prompt.with_validator(validator);
    }

    let theme = Theme::from_definition(definition.theme.as_ref())?;

    Ok(PreparedPrompt {
        prompt,
        answers,
        theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ordinal_pick_core::error::Error;
    use ordinal_pick_core::prompt::Outcome;
    use ordinal_pick_core::state::Event;

    #[test]
    fn test_positional_choices_build_prompt() {
        let args = Args::parse_from(["ordinal-pick", "-d", "c", "a", "b", "c"]);
        let mut prepared = prepare_prompt(&args, None).unwrap();

        assert_eq!(prepared.prompt.choices().len(), 3);
        assert_eq!(
            prepared.prompt.handle(Event::Submit, &prepared.answers),
            Outcome::Answered(vec!["c".to_string()])
        );
    }

    #[test]
    fn test_no_choices_is_an_error() {
        let args = Args::parse_from(["ordinal-pick"]);
        assert!(matches!(
            prepare_prompt(&args, None),
            Err(Error::MissingParameter(_))
        ));
    }

    #[test]
    fn test_bounds_become_validator() {
        let args = Args::parse_from(["ordinal-pick", "--max", "1", "-d", "a", "-d", "b", "a", "b"]);
        let mut prepared = prepare_prompt(&args, None).unwrap();

        assert_eq!(
            prepared.prompt.handle(Event::Submit, &prepared.answers),
            Outcome::Rejected("Select at most 1 item".to_string())
        );
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let args = Args::parse_from(["ordinal-pick", "--min", "3", "--max", "1", "a"]);
        assert!(matches!(
            prepare_prompt(&args, None),
            Err(Error::InvalidSelectionBounds { min: 3, max: 1 })
        ));
    }
}
