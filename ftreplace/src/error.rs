//! Error types for ftreplace

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FtError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Usage(String),

    #[error("Could not read from '{}'.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write to '{}'.", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not build the case-insensitive matcher.")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, FtError>;

impl FtError {
    /// Message of the underlying cause, if the error wraps one.
    pub fn cause(&self) -> Option<String> {
        std::error::Error::source(self).map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = FtError::Validation("Text to find was not specified.".to_string());
        assert_eq!(err.to_string(), "Text to find was not specified.");
        assert!(err.cause().is_none());
    }

    #[test]
    fn test_read_error_carries_cause() {
        let err = FtError::Read {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Could not read from 'missing.txt'.");
        assert_eq!(err.cause().as_deref(), Some("no such file"));
    }

    #[test]
    fn test_write_error_message() {
        let err = FtError::Write {
            path: PathBuf::from("out/a.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Could not write to 'out/a.txt'.");
        assert_eq!(err.cause().as_deref(), Some("denied"));
    }
}
