use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The string was empty.
    Empty,
    /// The string held only whitespace.
    Whitespace,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "must not be empty"),
            Self::Whitespace => write!(f, "must not be blank"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid argument '{argument}': {reason}")]
    #[diagnostic(
        code(sharpen::invalid_argument),
        help("pass a non-blank value for '{argument}'")
    )]
    InvalidArgument {
        argument: &'static str,
        reason: InvalidReason,
    },
}

impl Error {
    /// The name of the rejected argument.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => *argument,
        }
    }
}

/// Check that `value` is usable as an identifier, type, or token.
pub(crate) fn require(value: &str, argument: &'static str) -> Result<()> {
    let reason = if value.is_empty() {
        InvalidReason::Empty
    } else if value.trim().is_empty() {
        InvalidReason::Whitespace
    } else {
        return Ok(());
    };

    tracing::debug!(argument, %reason, "rejected argument");
    Err(Error::InvalidArgument { argument, reason })
}

/// Like [`require`], returning the value as an owned string.
pub(crate) fn required(value: impl Into<String>, argument: &'static str) -> Result<String> {
    let value = value.into();
    require(&value, argument)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_text() {
        assert!(require("Foo", "name").is_ok());
        assert!(require(" Foo ", "name").is_ok());
    }

    #[test]
    fn test_require_rejects_empty() {
        let err = require("", "name").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                argument: "name",
                reason: InvalidReason::Empty,
            }
        );
        assert_eq!(err.argument(), "name");
    }

    #[test]
    fn test_require_rejects_whitespace() {
        let err = required(" \t\n", "modifier").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument 'modifier': must not be blank"
        );
    }
}
