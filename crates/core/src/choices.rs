//! Choice list types for the ordinal prompt.
//!
//! A [`ChoiceList`] is an ordered sequence of selectable [`Item`]s and inert
//! [`Separator`] rows. Navigation works on "navigable" indexes, which count
//! every non-separator row; disabled items keep their index but can never be
//! selected or hold the cursor.

use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;

/// Answers collected so far by the host session.
///
/// Disabled predicates receive this read-only context every time the prompt
/// needs to know whether an item is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(IndexMap<String, String>);

impl Answers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Answers {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of asking an item whether it is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisabledStatus {
    Enabled,
    /// Disabled, with an optional message shown instead of "Disabled".
    Disabled(Option<String>),
}

impl DisabledStatus {
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, DisabledStatus::Disabled(_))
    }

    /// Text rendered in parentheses after a disabled item's name.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            DisabledStatus::Enabled => None,
            DisabledStatus::Disabled(Some(message)) => Some(message),
            DisabledStatus::Disabled(None) => Some(DEFAULT_DISABLED_REASON),
        }
    }
}

pub const DEFAULT_DISABLED_REASON: &str = "Disabled";

type DisabledPredicate = Arc<dyn Fn(&Answers) -> DisabledStatus + Send + Sync>;

/// How an item decides whether it is disabled.
#[derive(Clone, Default)]
pub enum Disabled {
    #[default]
    No,
    Yes,
    /// Disabled, showing this message instead of "Disabled".
    Reason(String),
    /// Evaluated against the current answers on every query, never cached.
    When(DisabledPredicate),
}

impl Disabled {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Answers) -> DisabledStatus + Send + Sync + 'static,
    {
        Disabled::When(Arc::new(predicate))
    }

    #[must_use]
    pub fn status(&self, answers: &Answers) -> DisabledStatus {
        match self {
            Disabled::No => DisabledStatus::Enabled,
            Disabled::Yes => DisabledStatus::Disabled(None),
            Disabled::Reason(message) => DisabledStatus::Disabled(Some(message.clone())),
            Disabled::When(predicate) => predicate(answers),
        }
    }
}

impl Debug for Disabled {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Disabled::No => f.write_str("No"),
            Disabled::Yes => f.write_str("Yes"),
            Disabled::Reason(message) => f.debug_tuple("Reason").field(message).finish(),
            Disabled::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

impl From<bool> for Disabled {
    fn from(value: bool) -> Self {
        if value {
            Disabled::Yes
        } else {
            Disabled::No
        }
    }
}

impl From<&str> for Disabled {
    fn from(reason: &str) -> Self {
        Disabled::Reason(reason.to_string())
    }
}

/// A selectable row.
#[derive(Debug, Clone)]
pub struct Item<T> {
    pub name: String,
    pub value: T,
    pub disabled: Disabled,
}

impl Item<String> {
    /// An item whose value is its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            name,
            disabled: Disabled::No,
        }
    }
}

impl<T> Item<T> {
    pub fn with_value(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            disabled: Disabled::No,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }

    #[must_use]
    pub fn disabled_status(&self, answers: &Answers) -> DisabledStatus {
        self.disabled.status(answers)
    }

    #[must_use]
    pub fn is_disabled(&self, answers: &Answers) -> bool {
        self.disabled_status(answers).is_disabled()
    }
}

/// An inert display-only row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    pub line: String,
}

const DEFAULT_SEPARATOR_LINE: &str = "──────────────";

impl Default for Separator {
    fn default() -> Self {
        Self {
            line: DEFAULT_SEPARATOR_LINE.to_string(),
        }
    }
}

impl Separator {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}

#[derive(Debug, Clone)]
pub enum Choice<T> {
    Item(Item<T>),
    Separator(Separator),
}

impl<T> Choice<T> {
    #[must_use]
    pub fn as_item(&self) -> Option<&Item<T>> {
        match self {
            Choice::Item(item) => Some(item),
            Choice::Separator(_) => None,
        }
    }
}

impl<T> From<Item<T>> for Choice<T> {
    fn from(item: Item<T>) -> Self {
        Choice::Item(item)
    }
}

impl<T> From<Separator> for Choice<T> {
    fn from(separator: Separator) -> Self {
        Choice::Separator(separator)
    }
}

/// Ordered list of rows shown by the prompt. Read-only once a prompt starts.
#[derive(Debug, Clone)]
pub struct ChoiceList<T> {
    choices: Vec<Choice<T>>,
}

impl<T> Default for ChoiceList<T> {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
        }
    }
}

impl<T> FromIterator<Choice<T>> for ChoiceList<T> {
    fn from_iter<I: IntoIterator<Item = Choice<T>>>(iter: I) -> Self {
        Self {
            choices: iter.into_iter().collect(),
        }
    }
}

impl<T> FromIterator<Item<T>> for ChoiceList<T> {
    fn from_iter<I: IntoIterator<Item = Item<T>>>(iter: I) -> Self {
        iter.into_iter().map(Choice::Item).collect()
    }
}

impl<T> ChoiceList<T> {
    #[must_use]
    pub fn new(choices: Vec<Choice<T>>) -> Self {
        Self { choices }
    }

    pub fn push(&mut self, choice: impl Into<Choice<T>>) {
        self.choices.push(choice.into());
    }

    /// Number of rows, separators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Number of non-separator rows.
    #[must_use]
    pub fn real_length(&self) -> usize {
        self.items().count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Choice<T>> {
        self.choices.iter()
    }

    /// Non-separator rows in list order.
    pub fn items(&self) -> impl Iterator<Item = &Item<T>> {
        self.choices.iter().filter_map(Choice::as_item)
    }

    /// The `pointer`-th non-separator row.
    #[must_use]
    pub fn get_choice(&self, pointer: usize) -> Option<&Item<T>> {
        self.items().nth(pointer)
    }

    /// Physical row index of the `pointer`-th non-separator row.
    #[must_use]
    pub fn row_of(&self, pointer: usize) -> Option<usize> {
        self.choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| choice.as_item().is_some())
            .nth(pointer)
            .map(|(row, _)| row)
    }

    /// Whether the `pointer`-th row exists and is not disabled.
    #[must_use]
    pub fn is_selectable(&self, pointer: usize, answers: &Answers) -> bool {
        self.get_choice(pointer)
            .is_some_and(|item| !item.is_disabled(answers))
    }

    /// First navigable index that can hold the cursor.
    #[must_use]
    pub fn first_selectable(&self, answers: &Answers) -> Option<usize> {
        self.items().position(|item| !item.is_disabled(answers))
    }
}

impl<T: PartialEq> ChoiceList<T> {
    #[must_use]
    pub fn find(&self, value: &T) -> Option<&Item<T>> {
        self.items().find(|item| item.value == *value)
    }
}

impl<'a, T> IntoIterator for &'a ChoiceList<T> {
    type Item = &'a Choice<T>;
    type IntoIter = std::slice::Iter<'a, Choice<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter()
    }
}
