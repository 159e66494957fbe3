use std::collections::TryReserveError;
use std::fmt;

/// Unified error type for the skip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction parameters were rejected (zero max level, probability
    /// outside (0, 1)).
    InvalidConfig(String),
    /// A node or its link vector could not be allocated.
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {msg}"),
            Error::OutOfMemory => write!(f, "Out of memory allocating skip list node"),
        }
    }
}

impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
