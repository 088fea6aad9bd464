//! Crate-level error types.

use std::fmt;

/// Errors produced by the volview crate.
///
/// Orientation updates never fail; degenerate input is corrected in place.
/// Only loading and saving options touches the outside world.
#[derive(Debug)]
pub enum VolviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VolviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => write!(f, "options parse error: {msg}"),
        }
    }
}

impl std::error::Error for VolviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for VolviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
