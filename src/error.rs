//! Error types for cornerstl

use thiserror::Error;

/// cornerstl error types
#[derive(Error, Debug)]
pub enum Error {
    /// Empty filename, or the file could not be opened or created
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A keyword was required but another token was found
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// The input ended in the middle of a structure
    #[error("Unexpected end of input: {0}")]
    UnexpectedEndOfInput(String),

    /// Structural or geometric validation failed before writing
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// No loader or saver is registered for the extension
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of [`Error`], without the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPath,
    MalformedToken,
    UnexpectedEndOfInput,
    PreconditionFailed,
    UnsupportedFormat,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPath(_) => ErrorKind::InvalidPath,
            Error::MalformedToken(_) => ErrorKind::MalformedToken,
            Error::UnexpectedEndOfInput(_) => ErrorKind::UnexpectedEndOfInput,
            Error::PreconditionFailed(_) => ErrorKind::PreconditionFailed,
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias for cornerstl operations
pub type Result<T> = std::result::Result<T, Error>;
