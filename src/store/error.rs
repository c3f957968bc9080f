//! Storage errors

use std::fmt;
use std::io;

/// Error type for session and completion stores
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing a store file failed
    Io(io::Error),
    /// A stored document could not be encoded or decoded
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Store I/O error: {e}"),
            Self::Serde(e) => write!(f, "Store format error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serde(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}
