//! Reading prompt definitions from disk.

use std::fs;
use std::path::Path;

use log::debug;

use crate::definitions::PromptDefinition;
use crate::error::{Error, Result};

const FILE_DESCRIPTION: &str = "prompt definition";

/// Reads and parses the YAML prompt definition at `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is empty
/// - The file contains invalid YAML or doesn't match the expected structure
pub fn get_prompt_definition(path: &str) -> Result<PromptDefinition> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Err(Error::empty_prompt_definition(path.to_string()));
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            FILE_DESCRIPTION.to_string(),
            path.to_string(),
            e,
        )
    })
}

/// Like [`get_prompt_definition`], but a missing file yields `None`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn get_optional_prompt_definition(path: &str) -> Result<Option<PromptDefinition>> {
    if !Path::exists(Path::new(path)) {
        debug!("No prompt definition at `{path}`");
        return Ok(None);
    }

    get_prompt_definition(path).map(Some)
}
