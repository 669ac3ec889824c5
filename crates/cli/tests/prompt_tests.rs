#[cfg(test)]
mod tests {
    use clap::Parser;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ordinal_pick_cli::arguments::{prepare_prompt, PreparedPrompt};
    use ordinal_pick_cli::cli_args::Args;
    use ordinal_pick_cli::selection::{decode_key, draw_frame, KeyAction};
    use ordinal_pick_core::file_handling::get_prompt_definition;
    use ordinal_pick_core::prompt::Outcome;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Feeds key presses through the decoder into the prompt, like the event loop does.
    fn press(prepared: &mut PreparedPrompt, codes: &[KeyCode]) -> Option<Outcome<String>> {
        let mut last = None;
        for code in codes {
            match decode_key(KeyEvent::new(*code, KeyModifiers::NONE)) {
                KeyAction::Prompt(event) => {
                    last = Some(prepared.prompt.handle(event, &prepared.answers));
                }
                KeyAction::Cancel => return None,
                KeyAction::Ignore => {}
            }
        }
        last
    }

    #[test]
    fn test_keys_produce_selection_order() {
        let args = Args::parse_from(["ordinal-pick", "tea", "coffee", "juice"]);
        let mut prepared = prepare_prompt(&args, None).unwrap();

        let outcome = press(
            &mut prepared,
            &[
                KeyCode::Char('3'),
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Char(' '),
                KeyCode::Enter,
            ],
        );
        assert_eq!(
            outcome,
            Some(Outcome::Answered(vec!["juice".to_string(), "tea".to_string()]))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let args = Args::parse_from(["ordinal-pick", "a", "b"]);
        let mut prepared = prepare_prompt(&args, None).unwrap();

        assert_eq!(press(&mut prepared, &[KeyCode::Char(' '), KeyCode::Esc]), None);
    }

    #[test]
    fn test_definition_file_with_answers_and_overrides() {
        let yaml_content = r#"
message: "Release steps"
min_selected: 1
theme:
  ordinal:
    name: "yellow"
choices:
  - build
  - name: "Deploy"
    value: "deploy"
    disabled_when:
      answer: "dry_run"
      equals: "yes"
      message: "Dry run"
  - test
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{yaml_content}").unwrap();
        let temp_path = temp_file.path().to_str().unwrap().to_string();
        let definition = get_prompt_definition(&temp_path).unwrap();

        let args = Args::parse_from(["ordinal-pick", "-c", temp_path.as_str(), "-a", "dry_run=yes"]);
        let mut prepared = prepare_prompt(&args, Some(definition)).unwrap();

        let frame = prepared.prompt.render(&prepared.answers).to_string();
        assert!(frame.contains("Release steps"));
        assert!(frame.contains("- Deploy (Dry run)"));

        assert_eq!(
            press(&mut prepared, &[KeyCode::Enter]),
            Some(Outcome::Rejected("Select at least 1 item".to_string()))
        );
        let frame = prepared.prompt.render(&prepared.answers).to_string();
        assert!(frame.contains(">> Select at least 1 item"));

        // Down skips the disabled deploy row.
        let outcome = press(
            &mut prepared,
            &[KeyCode::Down, KeyCode::Char(' '), KeyCode::Char('1'), KeyCode::Enter],
        );
        assert_eq!(
            outcome,
            Some(Outcome::Answered(vec!["test".to_string(), "build".to_string()]))
        );
    }

    #[test]
    fn test_final_frame_draws_answer() {
        let args = Args::parse_from(["ordinal-pick", "-m", "Pick", "x", "y"]);
        let mut prepared = prepare_prompt(&args, None).unwrap();
        press(&mut prepared, &[KeyCode::Char('2'), KeyCode::Enter]);

        let mut out = Vec::new();
        let frame = prepared.prompt.render(&prepared.answers);
        let drawn = draw_frame(&mut out, &frame, &prepared.theme, 0, (80, 24)).unwrap();

        assert_eq!(drawn, 1);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("Pick"));
        assert!(written.contains('y'));
    }

    #[test]
    fn test_malformed_answer_is_rejected() {
        let args = Args::parse_from(["ordinal-pick", "-a", "novalue", "a"]);
        assert!(prepare_prompt(&args, None).is_err());
    }
}
