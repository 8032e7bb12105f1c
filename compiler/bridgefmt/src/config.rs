//! `.bridgefmt` configuration files.
//!
//! A config file holds option arguments, the same spelling the command line
//! uses, any number per line. `#` starts a comment.
//!
//! ```text
//! # bridging for the legacy app target
//! --add-dynamic true
//! ```
//!
//! The nearest file wins: discovery walks up from the formatted path and
//! stops at the first `.bridgefmt`. Command-line options are applied on top.

use std::path::{Path, PathBuf};

use bridgefmt_rules::{FormatOptions, OptionsError};
use tracing::debug;

use crate::error::CliError;

/// File name looked up by [`find_config`].
pub const CONFIG_FILE: &str = ".bridgefmt";

/// Apply a run of option arguments in order.
///
/// A boolean option followed by `true` or `false` takes that value.
pub fn apply_args<S: AsRef<str>>(
    options: &mut FormatOptions,
    args: &[S],
) -> Result<(), OptionsError> {
    let mut i = 0;
    while i < args.len() {
        let next = args.get(i + 1).map(AsRef::<str>::as_ref);
        let consumed = options.apply_arg(args[i].as_ref(), next)?;
        i += if consumed { 2 } else { 1 };
    }
    Ok(())
}

/// Parse the text of a config file on top of `options`.
///
/// `path` is only used for error messages.
pub fn parse_config(
    text: &str,
    path: &Path,
    options: &mut FormatOptions,
) -> Result<(), CliError> {
    for (number, line) in text.lines().enumerate() {
        let line = line.split_once('#').map_or(line, |(before, _)| before);
        let args: Vec<&str> = line.split_whitespace().collect();
        apply_args(options, &args).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            line: number + 1,
            source,
        })?;
    }
    Ok(())
}

/// Find the `.bridgefmt` that governs `path`.
///
/// `path` may be a file or a directory. Relative paths are resolved against
/// the current directory so the walk reaches the file system root.
pub fn find_config(path: &Path) -> Option<PathBuf> {
    let start = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Read and parse the config file at `config_path`.
pub fn load_config(config_path: &Path) -> Result<FormatOptions, CliError> {
    let text =
        std::fs::read_to_string(config_path).map_err(|e| CliError::read(config_path, e))?;
    let mut options = FormatOptions::default();
    parse_config(&text, config_path, &mut options)?;
    debug!(config = %config_path.display(), ?options, "loaded config");
    Ok(options)
}

/// Options for formatting `path`: its config file, then `overrides`.
pub fn resolve_options<S: AsRef<str>>(
    path: &Path,
    overrides: &[S],
) -> Result<FormatOptions, CliError> {
    let mut options = match find_config(path) {
        Some(config_path) => load_config(&config_path)?,
        None => FormatOptions::default(),
    };
    apply_args(&mut options, overrides)?;
    Ok(options)
}
