//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Every option overrides the matching field of the prompt definition
//! file.

use clap::Parser;

/// Command-line arguments for the ordinal-pick CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use ordinal_pick_cli::cli_args::Args;
///
/// let args = Args::parse_from(["ordinal-pick", "-m", "Rank", "tea", "coffee"]);
/// assert_eq!(args.choices, vec!["tea", "coffee"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the prompt definition YAML.
    ///
    /// If not provided, `~/.ordinal-pick/prompt.yml` is used when it exists.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Question shown above the choices.
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Value selected up front. Repeat to pre-select several, in order.
    #[arg(long = "default", short = 'd', action = clap::ArgAction::Append)]
    pub defaults: Vec<String>,

    /// Number of choice rows shown at once.
    #[arg(long, short = 'p')]
    pub page_size: Option<usize>,

    /// Answers from earlier questions in the format key=value.
    ///
    /// Used by choices that are disabled depending on another answer.
    ///
    /// # Examples
    /// ```bash
    /// ordinal-pick -c deploy.yml -a env=prod
    /// ```
    #[arg(long = "answer", short = 'a', action = clap::ArgAction::Append)]
    pub answers: Vec<String>,

    /// Minimum number of choices to select before submitting.
    #[arg(long = "min")]
    pub min_selected: Option<usize>,

    /// Maximum number of choices that may be submitted.
    #[arg(long = "max")]
    pub max_selected: Option<usize>,

    /// Separator printed between selected values. Defaults to a newline.
    #[arg(long, default_value = "\n")]
    pub delimiter: String,

    /// Choices to order. Replaces the choices of the definition file.
    pub choices: Vec<String>,
}
