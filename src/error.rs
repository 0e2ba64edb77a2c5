use std::fmt;
use std::io;

use crate::types::{SourceIndex, Value};

/// Unified error type for sources and the merge.
#[derive(Debug)]
pub enum Error {
    /// IO error from a reader-backed source.
    Io(io::Error),
    /// Source data could not be decoded (bad integer line, etc).
    Corruption(String),
    /// The operation needs a capability the source doesn't have,
    /// e.g. rewinding a forward-only stream.
    Unsupported(String),
    /// A value was pulled from a merge with no live sources left.
    /// Callers must check `has_next()` first.
    Exhausted,
    /// A source yielded a value smaller than its previous one.
    /// Only reported when order verification is enabled.
    Unsorted {
        source: SourceIndex,
        previous: Value,
        next: Value,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::Corruption(msg) => write!(f, "Corruption: {msg}"),
            Error::Unsupported(msg) => write!(f, "Unsupported: {msg}"),
            Error::Exhausted => write!(f, "Merge exhausted: no live sources"),
            Error::Unsorted {
                source,
                previous,
                next,
            } => write!(
                f,
                "Source {source} out of order: {next} follows {previous}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
