//! Rule options and their command-line spelling.

use thiserror::Error;

use crate::add_dynamic::AddDynamic;

/// Flags that decide which rules run. Everything is off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Enables `addDynamic`.
    pub add_dynamic: bool,
}

/// Errors from parsing option arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for `--{option}`: expected `true` or `false`")]
    InvalidBool { option: String, value: String },
}

impl FormatOptions {
    /// Apply one `--key`, `--key value` or `--key=value` argument.
    ///
    /// `next` is the argument after `arg`, if any. A bare boolean flag
    /// consumes `next` only when it is `true` or `false`. Returns whether
    /// `next` was consumed.
    pub fn apply_arg(&mut self, arg: &str, next: Option<&str>) -> Result<bool, OptionsError> {
        let Some(body) = arg.strip_prefix("--") else {
            return Err(OptionsError::UnknownOption(arg.to_string()));
        };
        let (key, inline) = match body.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (body, None),
        };

        let slot = self
            .bool_slot(key)
            .ok_or_else(|| OptionsError::UnknownOption(arg.to_string()))?;

        if let Some(value) = inline {
            *slot = parse_bool(key, value)?;
            return Ok(false);
        }
        match next {
            Some(value @ ("true" | "false")) => {
                *slot = value == "true";
                Ok(true)
            }
            _ => {
                *slot = true;
                Ok(false)
            }
        }
    }

    /// Whether `key` names an option.
    pub fn is_option(key: &str) -> bool {
        key == AddDynamic::OPTION
    }

    fn bool_slot(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            AddDynamic::OPTION => Some(&mut self.add_dynamic),
            _ => None,
        }
    }
}

fn parse_bool(option: &str, value: &str) -> Result<bool, OptionsError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(OptionsError::InvalidBool {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests;
