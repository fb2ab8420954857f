use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for FontCorr
#[derive(Debug)]
pub enum Error {
    /// The input path does not reference a readable file
    InputNotFound(PathBuf),
    /// IO operations errors
    Io(io::Error),
    /// Report serialization errors
    Json(serde_json::Error),
    /// Configuration errors
    Config(String),
    /// Font library errors
    Font(String),
    /// Batch processing errors
    Batch(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => write!(f, "Input not found: {}", path.display()),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Font(msg) => write!(f, "Font error: {}", msg),
            Error::Batch(msg) => write!(f, "Batch processing error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Result type alias for FontCorr operations
pub type Result<T> = std::result::Result<T, Error>;
