use thiserror::Error;

use crate::domain::errors::IdError;
use crate::domain::errors::TextError;

/// Error for EmploymentType parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown employment type '{0}' (expected Full-time, Part-time, Contract or Internship)")]
pub struct EmploymentTypeError(pub String);

/// Top-level error for career operations
#[derive(Debug, Clone, Error)]
pub enum CareerError {
    #[error("Invalid career ID: {0}")]
    InvalidCareerId(#[from] IdError),

    #[error("Invalid career: {0}")]
    InvalidField(#[from] TextError),

    #[error("Invalid career: {0}")]
    InvalidEmploymentType(#[from] EmploymentTypeError),

    #[error("Career not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
