//! Selection state machine for the ordinal prompt.
//!
//! Every input event produces a new [`SelectionState`] snapshot through
//! [`transition`]. The machine never fails: events that do not apply (a
//! disabled row, an out-of-range number, anything after submit) leave the
//! state as it was.

use log::debug;

use crate::choices::{Answers, ChoiceList};

/// Semantic input events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    MoveUp,
    MoveDown,
    ToggleAtCursor,
    /// 1-based shortcut: moves the cursor to that row and toggles it.
    SelectByNumber(usize),
    Reset,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Pending,
    Answered,
}

/// Direction to cycle the cursor through the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<T> {
    /// Index into the non-separator rows of the choice list.
    pub cursor_position: usize,
    /// Selected values in the order they were selected.
    pub selected_values: Vec<T>,
    pub show_help_tip: bool,
    pub status: Status,
}

impl<T: Clone + PartialEq> SelectionState<T> {
    /// Initial state: defaults that exist and are enabled, in the given order,
    /// and the cursor on the first selectable row.
    #[must_use]
    pub fn new(choices: &ChoiceList<T>, defaults: &[T], answers: &Answers) -> Self {
        let selected_values = defaults.iter().fold(Vec::new(), |accum, value| {
            let selectable = choices
                .find(value)
                .is_some_and(|item| !item.is_disabled(answers));
            if selectable && !accum.contains(value) {
                update_selected_values(accum, value)
            } else {
                accum
            }
        });

        Self {
            cursor_position: choices.first_selectable(answers).unwrap_or(0),
            selected_values,
            show_help_tip: true,
            status: Status::Pending,
        }
    }
}

impl<T> SelectionState<T> {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.status == Status::Answered
    }
}

/// Toggles `value`: removes it if present, otherwise appends it.
#[must_use]
pub fn update_selected_values<T: Clone + PartialEq>(values: Vec<T>, value: &T) -> Vec<T> {
    if values.contains(value) {
        return values.into_iter().filter(|v| v != value).collect();
    }

    let mut values = values;
    values.push(value.clone());
    values
}

/// The selection as it would be submitted now: only values whose item still
/// exists and is not disabled.
#[must_use]
pub fn current_value<T: Clone + PartialEq>(
    state: &SelectionState<T>,
    choices: &ChoiceList<T>,
    answers: &Answers,
) -> Vec<T> {
    state
        .selected_values
        .iter()
        .filter(|value| {
            choices
                .find(value)
                .is_some_and(|item| !item.is_disabled(answers))
        })
        .cloned()
        .collect()
}

/// Computes the state that follows `event`.
#[must_use]
pub fn transition<T: Clone + PartialEq>(
    state: &SelectionState<T>,
    event: Event,
    choices: &ChoiceList<T>,
    answers: &Answers,
) -> SelectionState<T> {
    if state.is_answered() {
        return state.clone();
    }

    let mut next = state.clone();

    match event {
        Event::MoveUp => {
            next.cursor_position =
                move_cursor(state.cursor_position, CycleDirection::Up, choices, answers);
        }
        Event::MoveDown => {
            next.cursor_position =
                move_cursor(state.cursor_position, CycleDirection::Down, choices, answers);
        }
        Event::ToggleAtCursor => {
            next.show_help_tip = false;
            next.selected_values = toggle_choice(
                state.selected_values.clone(),
                state.cursor_position,
                choices,
                answers,
            );
        }
        Event::SelectByNumber(number) => {
            if number == 0 || number > choices.real_length() {
                debug!("Ignoring number shortcut {number}: out of range");
                return next;
            }

            let position = number - 1;
            if !choices.is_selectable(position, answers) {
                debug!("Ignoring number shortcut {number}: choice is disabled");
                return next;
            }

            next.cursor_position = position;
            next.selected_values =
                toggle_choice(state.selected_values.clone(), position, choices, answers);
        }
        Event::Reset => {
            next.selected_values.clear();
        }
        Event::Submit => {
            next.selected_values = current_value(state, choices, answers);
            next.show_help_tip = false;
            next.status = Status::Answered;
        }
    }

    next
}

fn toggle_choice<T: Clone + PartialEq>(
    values: Vec<T>,
    pointer: usize,
    choices: &ChoiceList<T>,
    answers: &Answers,
) -> Vec<T> {
    match choices.get_choice(pointer) {
        Some(item) if !item.is_disabled(answers) => update_selected_values(values, &item.value),
        _ => values,
    }
}

/// Steps the cursor one row in `direction`, wrapping around and skipping
/// disabled rows. At most one full cycle is searched; if no row is selectable
/// the cursor stays where it was.
fn move_cursor<T>(
    cursor_position: usize,
    direction: CycleDirection,
    choices: &ChoiceList<T>,
    answers: &Answers,
) -> usize {
    let len = choices.real_length();
    if len == 0 {
        return cursor_position;
    }

    let mut candidate = cursor_position % len;
    for _ in 0..len {
        candidate = match direction {
            CycleDirection::Up => {
                if candidate == 0 {
                    len - 1
                } else {
                    candidate - 1
                }
            }
            CycleDirection::Down => (candidate + 1) % len,
        };

        if choices.is_selectable(candidate, answers) {
            return candidate;
        }
    }

    debug!("No selectable choice found, cursor stays at {cursor_position}");
    cursor_position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{Item, Separator};

    fn abc() -> ChoiceList<String> {
        ["A", "B", "C"].into_iter().map(Item::new).collect()
    }

    fn run(
        choices: &ChoiceList<String>,
        state: SelectionState<String>,
        events: &[Event],
    ) -> SelectionState<String> {
        let answers = Answers::new();
        events
            .iter()
            .fold(state, |state, event| transition(&state, *event, choices, &answers))
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_update_selected_values_appends_and_removes() {
        let values = update_selected_values(strings(&["a", "b"]), &"c".to_string());
        assert_eq!(values, strings(&["a", "b", "c"]));

        let values = update_selected_values(values, &"b".to_string());
        assert_eq!(values, strings(&["a", "c"]));
    }

    #[test]
    fn test_end_to_end_keeps_selection_order() {
        let choices = abc();
        let state = SelectionState::new(&choices, &[], &Answers::new());
        let state = run(
            &choices,
            state,
            &[
                Event::MoveDown,
                Event::ToggleAtCursor,
                Event::MoveUp,
                Event::ToggleAtCursor,
                Event::Submit,
            ],
        );

        assert_eq!(state.status, Status::Answered);
        assert_eq!(state.selected_values, strings(&["B", "A"]));
    }

    #[test]
    fn test_toggle_pair_restores_state() {
        let choices = abc();
        let state = SelectionState::new(&choices, &strings(&["C"]), &Answers::new());
        let toggled_twice = run(
            &choices,
            state.clone(),
            &[Event::ToggleAtCursor, Event::ToggleAtCursor],
        );

        assert_eq!(toggled_twice.selected_values, state.selected_values);
        assert_eq!(toggled_twice.cursor_position, state.cursor_position);
    }

    #[test]
    fn test_toggle_hides_help_tip() {
        let choices = abc();
        let state = SelectionState::new(&choices, &[], &Answers::new());
        assert!(state.show_help_tip);

        let state = run(&choices, state, &[Event::ToggleAtCursor]);
        assert!(!state.show_help_tip);
    }

    #[test]
    fn test_reset_then_submit_is_empty() {
        let choices = abc();
        let state = SelectionState::new(&choices, &[], &Answers::new());
        let state = run(
            &choices,
            state,
            &[
                Event::ToggleAtCursor,
                Event::MoveDown,
                Event::ToggleAtCursor,
                Event::Reset,
            ],
        );
        assert_eq!(state.cursor_position, 1);

        let state = run(&choices, state, &[Event::Submit]);
        assert!(state.selected_values.is_empty());
    }

    #[test]
    fn test_down_wraps_after_full_cycle() {
        let choices = abc();
        let start = SelectionState::new(&choices, &[], &Answers::new());
        let state = run(
            &choices,
            start.clone(),
            &[Event::MoveDown, Event::MoveDown, Event::MoveDown],
        );
        assert_eq!(state.cursor_position, start.cursor_position);

        let state = run(&choices, start, &[Event::MoveUp]);
        assert_eq!(state.cursor_position, 2);
    }

    #[test]
    fn test_navigation_skips_disabled_both_directions() {
        let choices: ChoiceList<String> = vec![
            Item::new("A"),
            Item::new("B").disabled(true),
            Item::new("C"),
        ]
        .into_iter()
        .collect();
        let state = SelectionState::new(&choices, &[], &Answers::new());
        assert_eq!(state.cursor_position, 0);

        let state = run(&choices, state, &[Event::MoveDown]);
        assert_eq!(state.cursor_position, 2);

        let state = run(&choices, state, &[Event::MoveUp]);
        assert_eq!(state.cursor_position, 0);

        let state = run(&choices, state, &[Event::MoveDown, Event::MoveDown]);
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_navigation_ignores_separators() {
        let choices = ChoiceList::new(vec![
            Item::new("A").into(),
            Separator::default().into(),
            Item::new("B").into(),
        ]);
        let state = SelectionState::new(&choices, &[], &Answers::new());
        let state = run(&choices, state, &[Event::MoveDown, Event::ToggleAtCursor]);

        assert_eq!(state.cursor_position, 1);
        assert_eq!(state.selected_values, strings(&["B"]));
    }

    #[test]
    fn test_all_disabled_list_terminates() {
        let choices: ChoiceList<String> = vec![
            Item::new("A").disabled(true),
            Item::new("B").disabled("nope"),
        ]
        .into_iter()
        .collect();
        let state = SelectionState::new(&choices, &[], &Answers::new());
        let state = run(
            &choices,
            state,
            &[Event::MoveDown, Event::MoveUp, Event::ToggleAtCursor],
        );

        assert_eq!(state.cursor_position, 0);
        assert!(state.selected_values.is_empty());
    }

    #[test]
    fn test_number_shortcut_moves_and_toggles() {
        let choices = abc();
        let state = SelectionState::new(&choices, &[], &Answers::new());
        let state = run(&choices, state, &[Event::SelectByNumber(2)]);

        assert_eq!(state.cursor_position, 1);
        assert_eq!(state.selected_values, strings(&["B"]));
        // Number keys do not hide the help tip, only space does.
        assert!(state.show_help_tip);
    }

    #[test]
    fn test_number_shortcut_out_of_range_or_disabled_is_noop() {
        let choices: ChoiceList<String> = vec![Item::new("A"), Item::new("B").disabled(true)]
            .into_iter()
            .collect();
        let start = SelectionState::new(&choices, &[], &Answers::new());

        for number in [0, 2, 3, 9] {
            let state = run(&choices, start.clone(), &[Event::SelectByNumber(number)]);
            assert_eq!(state, start, "shortcut {number} should be ignored");
        }
    }

    #[test]
    fn test_defaults_filtered_against_disabled_and_missing() {
        let choices: ChoiceList<String> = vec![
            Item::new("1"),
            Item::new("2").disabled(true),
            Item::new("3"),
        ]
        .into_iter()
        .collect();
        let state =
            SelectionState::new(&choices, &strings(&["1", "2", "4", "1"]), &Answers::new());

        assert_eq!(state.selected_values, strings(&["1"]));
    }

    #[test]
    fn test_submit_drops_values_disabled_since_selection() {
        let choices: ChoiceList<String> = vec![
            Item::new("A"),
            Item::new("B").disabled(crate::choices::Disabled::when(|answers| {
                if answers.get("lock").is_some() {
                    crate::choices::DisabledStatus::Disabled(None)
                } else {
                    crate::choices::DisabledStatus::Enabled
                }
            })),
        ]
        .into_iter()
        .collect();

        let state = SelectionState::new(&choices, &strings(&["A", "B"]), &Answers::new());
        assert_eq!(state.selected_values, strings(&["A", "B"]));

        let mut answers = Answers::new();
        answers.insert("lock", "yes");
        let state = transition(&state, Event::Submit, &choices, &answers);
        assert_eq!(state.selected_values, strings(&["A"]));
    }

    #[test]
    fn test_events_after_submit_are_ignored() {
        let choices = abc();
        let state = SelectionState::new(&choices, &[], &Answers::new());
        let answered = run(&choices, state, &[Event::ToggleAtCursor, Event::Submit]);
        let after = run(
            &choices,
            answered.clone(),
            &[Event::MoveDown, Event::ToggleAtCursor, Event::Reset],
        );

        assert_eq!(after, answered);
    }

    #[test]
    fn test_reachable_states_have_no_duplicates_or_disabled_values() {
        let choices: ChoiceList<String> = vec![
            Item::new("A"),
            Item::new("B").disabled(true),
            Item::new("C"),
            Item::new("D"),
        ]
        .into_iter()
        .collect();
        let events = [
            Event::MoveDown,
            Event::ToggleAtCursor,
            Event::SelectByNumber(2),
            Event::SelectByNumber(4),
            Event::MoveUp,
            Event::ToggleAtCursor,
            Event::SelectByNumber(3),
            Event::ToggleAtCursor,
            Event::MoveDown,
            Event::SelectByNumber(1),
        ];

        let answers = Answers::new();
        let mut state = SelectionState::new(&choices, &[], &answers);
        for event in events {
            state = transition(&state, event, &choices, &answers);
            let mut seen = state.selected_values.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), state.selected_values.len());
            assert!(!state.selected_values.contains(&"B".to_string()));
            assert_ne!(state.cursor_position, 1);
        }
    }
}
