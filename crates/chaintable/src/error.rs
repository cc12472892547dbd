//! Error types for chaintable

use std::fmt;

/// Result type alias for chaintable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for table operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key shape has no defined normalization mapping
    UnsupportedKey(&'static str),

    /// Composite key is structurally unusable (e.g. nested too deep)
    InvalidKey(String),

    /// Out-of-range positional access
    IndexOutOfBounds(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedKey(what) => write!(f, "Unsupported key: {}", what),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::IndexOutOfBounds(idx) => write!(f, "Index out of bounds: {}", idx),
        }
    }
}

impl std::error::Error for Error {}
