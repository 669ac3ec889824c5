//! The ordinal prompt: configuration, state machine and renderer composed
//! into one value the host drives with events.

use std::fmt::Display;

use log::{debug, info, warn};

use crate::choices::{Answers, ChoiceList};
use crate::error::{Error, Result};
use crate::paginator::Viewport;
use crate::render::{render, Frame, RenderOptions, DEFAULT_PAGE_SIZE};
use crate::state::{current_value, transition, Event, SelectionState};

pub const DEFAULT_PREFIX: &str = "?";

/// Checks the value about to be submitted; `Err` holds the message to show.
pub type Validator<T> = Box<dyn Fn(&[T]) -> std::result::Result<(), String>>;

/// Settings consumed when the prompt is constructed.
#[derive(Debug, Clone)]
pub struct PromptConfig<T> {
    pub message: String,
    /// Required. `None` is a configuration error.
    pub choices: Option<ChoiceList<T>>,
    /// Values selected up front, in this order.
    pub default: Option<Vec<T>>,
    pub page_size: usize,
    pub prefix: String,
}

impl<T> Default for PromptConfig<T> {
    fn default() -> Self {
        Self {
            message: String::new(),
            choices: None,
            default: None,
            page_size: DEFAULT_PAGE_SIZE,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// What the host should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Keep reading events and redraw.
    Pending,
    /// Validation failed; redraw shows the message.
    Rejected(String),
    /// The prompt is answered with these values, in selection order.
    Answered(Vec<T>),
}

pub struct OrdinalPrompt<T> {
    message: String,
    prefix: String,
    page_size: usize,
    choices: ChoiceList<T>,
    state: SelectionState<T>,
    viewport: Viewport,
    error: Option<String>,
    validator: Option<Validator<T>>,
}

impl<T: Clone + PartialEq> OrdinalPrompt<T> {
    /// Builds the prompt. Defaults that are missing from the list or disabled
    /// under `answers` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] when no choices were given and
    /// [`Error::InvalidPageSize`] for a page size of 0.
    pub fn new(config: PromptConfig<T>, answers: &Answers) -> Result<Self> {
        let Some(choices) = config.choices else {
            return Err(Error::missing_parameter("choices"));
        };

        if config.page_size == 0 {
            return Err(Error::InvalidPageSize(config.page_size));
        }

        let defaults = config.default.unwrap_or_default();
        let state = SelectionState::new(&choices, &defaults, answers);
        if state.selected_values.len() < defaults.len() {
            info!(
                "Dropped {} default value(s) that are unknown, disabled or repeated",
                defaults.len() - state.selected_values.len()
            );
        }

        Ok(Self {
            message: config.message,
            prefix: config.prefix,
            page_size: config.page_size,
            choices,
            state,
            viewport: Viewport::default(),
            error: None,
            validator: None,
        })
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator<T>) -> Self {
        self.validator = Some(validator);
        self
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState<T> {
        &self.state
    }

    #[must_use]
    pub fn choices(&self) -> &ChoiceList<T> {
        &self.choices
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The final answer once submitted.
    #[must_use]
    pub fn answer(&self) -> Option<&[T]> {
        self.state
            .is_answered()
            .then_some(self.state.selected_values.as_slice())
    }

    /// The selection a validator would see right now.
    #[must_use]
    pub fn current_value(&self, answers: &Answers) -> Vec<T> {
        current_value(&self.state, &self.choices, answers)
    }

    /// Applies one event. A pending validation message is cleared by any
    /// event; a rejected submit leaves the prompt pending.
    pub fn handle(&mut self, event: Event, answers: &Answers) -> Outcome<T> {
        if let Some(answer) = self.answer() {
            return Outcome::Answered(answer.to_vec());
        }

        self.error = None;

        if event == Event::Submit {
            if let Some(validator) = &self.validator {
                if let Err(message) = validator(&self.current_value(answers)) {
                    warn!("Selection rejected: {message}");
                    self.error = Some(message.clone());
                    return Outcome::Rejected(message);
                }
            }
        }

        debug!("Handling {event:?}");
        self.state = transition(&self.state, event, &self.choices, answers);

        match self.answer() {
            Some(answer) => Outcome::Answered(answer.to_vec()),
            None => Outcome::Pending,
        }
    }
}

impl<T: Clone + PartialEq + Display> OrdinalPrompt<T> {
    /// Renders the current frame and keeps the scroll position for the next.
    pub fn render(&mut self, answers: &Answers) -> Frame {
        let options = RenderOptions {
            prefix: &self.prefix,
            message: &self.message,
            page_size: self.page_size,
            error: self.error.as_deref(),
        };
        let (frame, viewport) =
            render(&self.choices, &self.state, answers, &options, self.viewport);
        self.viewport = viewport;
        frame
    }
}
