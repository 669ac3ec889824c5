use log::debug;
use ordinal_pick_core::choices::Answers;
use ordinal_pick_core::error::Error::InvalidAnswer;
use ordinal_pick_core::error::Result;

/// Parses `key=value` answers given on the command line.
///
/// Only the first `=` splits the pair, so values may contain `=`. A later
/// answer for the same key replaces the earlier one.
///
/// # Errors
///
/// Returns [`InvalidAnswer`] if an entry has no `=` or an empty key.
///
/// # Examples
///
/// ```rust
/// use ordinal_pick_cli::arguments::parse_answers;
///
/// let answers = parse_answers(&["env=prod".to_string()]).unwrap();
/// assert_eq!(answers.get("env"), Some("prod"));
/// ```
pub fn parse_answers(answer_args: &[String]) -> Result<Answers> {
    let mut answers = Answers::new();

    for answer in answer_args {
        let Some((key, value)) = answer.split_once('=') else {
            return Err(InvalidAnswer(answer.to_string()));
        };

        if key.is_empty() {
            return Err(InvalidAnswer(answer.to_string()));
        }

        debug!("Answer `{key}` = `{value}`");
        answers.insert(key, value);
    }

    Ok(answers)
}
