use thiserror::Error;

use crate::domain::errors::IdError;
use crate::domain::errors::TextError;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PhoneError;

/// Error for uploaded resume validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResumeError {
    #[error("Please upload a resume")]
    Missing,

    #[error("Unsupported resume type '{0}': only .pdf, .doc and .docx files are accepted")]
    UnsupportedType(String),

    #[error("Resume too large: maximum {max} bytes, got {actual}")]
    TooLarge { max: usize, actual: usize },
}

/// Error for ApplicationStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown application status '{0}' (expected pending, reviewed, accepted or rejected)")]
pub struct ApplicationStatusError(pub String);

/// Top-level error for job application operations
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    #[error("Invalid ID: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid application: {0}")]
    InvalidField(#[from] TextError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    #[error("{0}")]
    InvalidResume(#[from] ResumeError),

    #[error("{0}")]
    InvalidStatus(#[from] ApplicationStatusError),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Application not found: {0}")]
    NotFound(String),

    #[error("Resume storage error: {0}")]
    StorageError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
