//! Error types for the core library

use thiserror::Error;

use crate::value::FieldType;

/// The core error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The object a property points into has been dropped
    #[error("Property target no longer exists: {0}")]
    TargetExpired(String),

    /// No field exists at the given path
    #[error("No field at path: {0}")]
    PathNotFound(String),

    /// A value of the wrong shape was read or written
    #[error("Type mismatch at '{path}': expected {expected:?}, found {found:?}")]
    TypeMismatch {
        path: String,
        expected: FieldType,
        found: FieldType,
    },

    /// Type not registered
    #[error("Type not registered: {0}")]
    TypeNotRegistered(String),

    /// Type already registered
    #[error("Type already registered: {0}")]
    TypeAlreadyRegistered(String),

    /// Generic error with message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Message(s.into())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Message(s)
    }
}
