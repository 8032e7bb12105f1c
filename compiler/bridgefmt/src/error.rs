//! CLI error type.

use std::io;
use std::path::{Path, PathBuf};

use bridgefmt_rules::OptionsError;
use thiserror::Error;

/// Everything that can stop a command short of producing output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("error writing '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("error reading from stdin: {0}")]
    Stdin(#[source] io::Error),

    /// A bad option in a `.bridgefmt` file.
    #[error("{}:{line}: {source}", path.display())]
    Config {
        path: PathBuf,
        line: usize,
        source: OptionsError,
    },

    #[error(transparent)]
    Options(#[from] OptionsError),

    /// Malformed command line.
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Classify a failed read of `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source },
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        CliError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_errors_are_classified() {
        let path = Path::new("Sources/App.swift");
        let missing = CliError::read(path, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(missing.to_string(), "cannot find file 'Sources/App.swift'");

        let denied = CliError::read(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(
            denied.to_string(),
            "permission denied reading 'Sources/App.swift'"
        );

        let binary = CliError::read(path, io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(binary, CliError::InvalidUtf8 { .. }));
    }

    #[test]
    fn config_error_names_file_and_line() {
        let err = CliError::Config {
            path: PathBuf::from(".bridgefmt"),
            line: 3,
            source: OptionsError::UnknownOption("--indent".to_string()),
        };
        assert_eq!(err.to_string(), ".bridgefmt:3: unknown option `--indent`");
    }
}
