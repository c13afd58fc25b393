//! Error types for unhtml library.

use std::io;
use thiserror::Error;

/// Result type alias for unhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around HTML conversion.
///
/// The conversion pipeline itself is total; every variant here comes from
/// the layers around it (input validation, file access, request decoding).
#[derive(Error, Debug)]
pub enum Error {
    /// The HTML input was missing or empty.
    #[error("HTML content required")]
    MissingHtml,

    /// The request could not be understood.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The input file is not an HTML or text file.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// The input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected failure during conversion.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error was caused by the caller's input rather than by
    /// the converter or the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingHtml
                | Error::InvalidRequest(_)
                | Error::UnsupportedInput(_)
                | Error::Encoding(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingHtml;
        assert_eq!(err.to_string(), "HTML content required");

        let err = Error::UnsupportedInput("image.png".to_string());
        assert_eq!(err.to_string(), "Unsupported input: image.png");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_classification() {
        assert!(Error::MissingHtml.is_validation());
        assert!(Error::InvalidRequest("bad".into()).is_validation());
        assert!(!Error::Internal("boom".into()).is_validation());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_validation());
    }
}
