use thiserror::Error;

/// Error for identifier parsing failures, shared by every aggregate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for free-text field validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}
