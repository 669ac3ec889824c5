use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use ordinal_pick_core::config::get_definition_path;
use ordinal_pick_core::definitions::PromptDefinition;
use ordinal_pick_core::error::{Error, Result};
use ordinal_pick_core::file_handling;
use std::process::ExitCode;

use ordinal_pick_cli::arguments::{prepare_prompt, PreparedPrompt};
use ordinal_pick_cli::cli_args::Args;
use ordinal_pick_cli::selection;

/// Exit status used when the user cancels, as for SIGINT.
const CANCELLED_EXIT_CODE: u8 = 130;

fn load_definition(args: &Args) -> Result<Option<PromptDefinition>> {
    let definition_path = get_definition_path(&args.config_path);
    debug!("Definition path: `{definition_path}`");

    if args.config_path.is_some() {
        // An explicit path must exist
        return file_handling::get_prompt_definition(&definition_path).map(Some);
    }

    let definition = file_handling::get_optional_prompt_definition(&definition_path)?;
    if definition.is_none() {
        debug!("No definition at `{definition_path}`, using command line only");
    }

    Ok(definition)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let definition = load_definition(&args)?;
    let PreparedPrompt {
        mut prompt,
        answers,
        theme,
    } = prepare_prompt(&args, definition)?;

    let values = selection::prompt_for_ordered_choices(&mut prompt, &answers, &theme)?;
    info!("Selected {} value(s)", values.len());

    println!("{}", values.iter().join(&args.delimiter));

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cancelled) => ExitCode::from(CANCELLED_EXIT_CODE),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
