use thiserror::Error;

/// Error type shared by the fallible exercise solutions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument failed validation before the algorithm ran
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for fallible exercise solutions
pub type Result<T> = std::result::Result<T, Error>;
