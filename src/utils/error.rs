use std::result;

use thiserror::Error;

/// A type alias for handling errors related to reading ARC statistics.
pub type Result<T> = result::Result<T, ArcError>;

/// An error that can occur while collecting or formatting ARC statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArcError {
    /// A value that can't be used as a byte count or counter, such as a
    /// negative number.
    #[error("Invalid input, {0}")]
    InvalidInput(String),
    /// A required statistic was not present in the source.
    #[error("The ARC statistics are missing the required field '{0}'")]
    MissingField(&'static str),
    /// An error when there is an IO exception.
    #[error("IO exception, {0}")]
    InvalidIo(String),
}

impl From<std::io::Error> for ArcError {
    fn from(err: std::io::Error) -> Self {
        ArcError::InvalidIo(err.to_string())
    }
}
