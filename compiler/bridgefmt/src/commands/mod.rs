//! Command handlers for the bridgefmt CLI.
//!
//! Each submodule implements one command. Handlers print their own
//! diagnostics and return the process exit code.

use std::path::Path;
use std::process::ExitCode;

use crate::error::CliError;

mod fmt;
mod lex;
mod rules;

pub use fmt::{
    format_directory, format_file, parse_fmt_args, render_diff, run_format, FmtArgs,
    FormatConfig, FormatResult,
};
pub use lex::{lex_file, render_tokens};
pub use rules::{list_rules, render_rules};

/// Read a source file, classifying the failure.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}

/// Print `err` and produce a failing exit code.
pub(crate) fn report(err: &CliError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::FAILURE
}
