use thiserror::Error;

use crate::domain::errors::IdError;
use crate::domain::errors::TextError;
use crate::domain::user::errors::EmailError;

/// Top-level error for contact form operations
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("Invalid contact ID: {0}")]
    InvalidContactId(#[from] IdError),

    #[error("Invalid contact message: {0}")]
    InvalidField(#[from] TextError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
