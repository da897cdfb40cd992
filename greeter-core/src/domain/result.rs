//! Result and error types for the core library

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::UserId;

/// Core library error type
///
/// Every operation returns one of these to the caller. Nothing in this
/// crate terminates the process; the outermost entry point decides what
/// a failure means.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("No user with id {0}")]
    NotFound(UserId),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Hour out of range: {0} (expected 0-23)")]
    InvalidHour(u32),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a lookup error
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create a write error for the given destination
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = Error::NotFound(99);
        assert_eq!(err.to_string(), "No user with id 99");
    }

    #[test]
    fn test_write_error_names_the_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::write("/no/such/dir/out.txt", io);
        assert!(err.to_string().contains("/no/such/dir/out.txt"));
    }
}
