//! Error type shared by the whole crate.

use std::fmt;

/// Errors reported by parsing and by operations with preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LpbError {
    /// Malformed or empty textual input.
    InvalidInput(String),
    /// An operation was invoked outside of its domain, e.g. a negative
    /// coefficient or a split of a node without remaining variables.
    PreconditionViolation(String),
}

impl fmt::Display for LpbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LpbError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            LpbError::PreconditionViolation(msg) => write!(f, "Precondition violated: {}", msg),
        }
    }
}

impl std::error::Error for LpbError {}

pub type Result<T> = std::result::Result<T, LpbError>;
