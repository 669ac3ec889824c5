//! Ordinal Pick CLI Library
//!
//! This crate provides the command-line front end for ordinal-pick, an
//! interactive prompt that asks the user to pick several choices and
//! returns them in the order they were picked.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Merging arguments with the prompt definition file
//! - [`selection`]: Key decoding, colors and the terminal event loop
//!
//! # Examples
//!
//! ```bash
//! # Order a list given on the command line
//! ordinal-pick -m "Rank your drinks" tea coffee juice
//!
//! # Use a definition file and answers from earlier questions
//! ordinal-pick -c deploy.yml -a env=prod --min 1
//!
//! # Print the answer on one line
//! ordinal-pick --delimiter , a b c
//! ```

pub mod arguments;
pub mod cli_args;
pub mod selection;
