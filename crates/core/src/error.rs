use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required parameter for the ordinal prompt: `{}`", .0)]
    MissingParameter(String),

    #[error("Page size must be a positive number, got {}.", .0)]
    InvalidPageSize(usize),

    #[error("Minimum selection count ({}) is larger than the maximum ({}).", .min, .max)]
    InvalidSelectionBounds { min: usize, max: usize },

    #[error("Answers must be given as `key=value`, got: `{}`", .0)]
    InvalidAnswer(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No choices were found in the prompt definition. Is `{}` empty?", .path)]
    EmptyPromptDefinition { path: String },

    #[error("A choice entry must have a non-empty `name`.")]
    EmptyChoiceName,

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("The prompt was cancelled.")]
    Cancelled,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn missing_parameter(name: &str) -> Self {
        error!("Ordinal prompt constructed without `{name}`");
        Self::MissingParameter(name.to_string())
    }

    pub fn empty_prompt_definition(path: String) -> Self {
        Self::EmptyPromptDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
