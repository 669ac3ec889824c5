use serde::Deserialize;

use crate::choices::{Choice, ChoiceList, Disabled, DisabledStatus, Item, Separator};
use crate::error::{Error, Result};
use crate::prompt::{PromptConfig, Validator, DEFAULT_PREFIX};
use crate::render::DEFAULT_PAGE_SIZE;

/// A prompt as written in the YAML definition file.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PromptDefinition {
    pub message: Option<String>,
    pub prefix: Option<String>,
    pub choices: Option<Vec<ChoiceDefinition>>,
    pub default: Option<Vec<String>>,
    pub page_size: Option<usize>,
    pub min_selected: Option<usize>,
    pub max_selected: Option<usize>,
    pub theme: Option<ThemeDefinition>,
}

/// One entry of `choices`: a bare name, an item, or a separator.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ChoiceDefinition {
    Name(String),
    Item(ItemDefinition),
    Separator(SeparatorDefinition),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ItemDefinition {
    pub name: String,
    pub value: Option<String>,
    pub disabled: Option<DisabledDefinition>,
    pub disabled_when: Option<DisabledWhenDefinition>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SeparatorDefinition {
    /// An empty line uses the default separator.
    pub separator: String,
}

/// `disabled: true` or `disabled: "reason"`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DisabledDefinition {
    Flag(bool),
    Reason(String),
}

/// Disables an item while the answer `answer` equals `equals`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DisabledWhenDefinition {
    pub answer: String,
    pub equals: String,
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ThemeDefinition {
    pub pointer: Option<ColorDefinition>,
    pub ordinal: Option<ColorDefinition>,
    pub help: Option<ColorDefinition>,
    pub error: Option<ColorDefinition>,
}

impl ItemDefinition {
    fn to_disabled(&self) -> Disabled {
        if let Some(when) = &self.disabled_when {
            let when = when.clone();
            return Disabled::when(move |answers| {
                if answers.get(&when.answer) == Some(when.equals.as_str()) {
                    DisabledStatus::Disabled(when.message.clone())
                } else {
                    DisabledStatus::Enabled
                }
            });
        }

        match &self.disabled {
            None | Some(DisabledDefinition::Flag(false)) => Disabled::No,
            Some(DisabledDefinition::Flag(true)) => Disabled::Yes,
            Some(DisabledDefinition::Reason(reason)) => Disabled::Reason(reason.clone()),
        }
    }
}

impl ChoiceDefinition {
    /// Converts the entry into a choice whose value is a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChoiceName`] for an empty name.
    pub fn to_choice(&self) -> Result<Choice<String>> {
        match self {
            ChoiceDefinition::Name(name) => {
                if name.is_empty() {
                    return Err(Error::EmptyChoiceName);
                }
                Ok(Item::new(name.clone()).into())
            }
            ChoiceDefinition::Item(item) => {
                if item.name.is_empty() {
                    return Err(Error::EmptyChoiceName);
                }
                let value = item.value.clone().unwrap_or_else(|| item.name.clone());
                Ok(Item::with_value(item.name.clone(), value)
                    .disabled(item.to_disabled())
                    .into())
            }
            ChoiceDefinition::Separator(separator) => Ok(if separator.separator.is_empty() {
                Separator::default().into()
            } else {
                Separator::new(separator.separator.clone()).into()
            }),
        }
    }
}

impl PromptDefinition {
    /// # Errors
    ///
    /// Returns an error if any choice entry is invalid.
    pub fn choice_list(&self) -> Result<Option<ChoiceList<String>>> {
        self.choices
            .as_ref()
            .map(|choices| {
                choices
                    .iter()
                    .map(ChoiceDefinition::to_choice)
                    .collect::<Result<ChoiceList<String>>>()
            })
            .transpose()
    }

    /// Builds the prompt configuration. `choices` replaces the file's choices
    /// when given.
    ///
    /// # Errors
    ///
    /// Returns an error if any choice entry is invalid.
    pub fn to_config(&self, choices: Option<ChoiceList<String>>) -> Result<PromptConfig<String>> {
        let choices = match choices {
            Some(choices) => Some(choices),
            None => self.choice_list()?,
        };

        Ok(PromptConfig {
            message: self.message.clone().unwrap_or_default(),
            choices,
            default: self.default.clone(),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            prefix: self.prefix.clone().unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        })
    }

    /// Validator enforcing `min_selected` / `max_selected`, if either is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelectionBounds`] when the minimum exceeds the
    /// maximum.
    pub fn validator<T: 'static>(&self) -> Result<Option<Validator<T>>> {
        selection_count_validator(self.min_selected, self.max_selected)
    }
}

fn pluralize(count: usize) -> &'static str {
    if count == 1 {
        "item"
    } else {
        "items"
    }
}

/// Builds a validator that checks how many values are selected.
///
/// # Errors
///
/// Returns [`Error::InvalidSelectionBounds`] when `min > max`.
pub fn selection_count_validator<T: 'static>(
    min: Option<usize>,
    max: Option<usize>,
) -> Result<Option<Validator<T>>> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(Error::InvalidSelectionBounds { min, max });
        }
    }

    if min.is_none() && max.is_none() {
        return Ok(None);
    }

    Ok(Some(Box::new(move |values: &[T]| {
        if let Some(min) = min {
            if values.len() < min {
                return Err(format!("Select at least {min} {}", pluralize(min)));
            }
        }
        if let Some(max) = max {
            if values.len() > max {
                return Err(format!("Select at most {max} {}", pluralize(max)));
            }
        }
        Ok(())
    })))
}
