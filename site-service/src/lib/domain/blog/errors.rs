use thiserror::Error;

use crate::domain::errors::IdError;
use crate::domain::errors::TextError;

/// Top-level error for blog operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid blog post ID: {0}")]
    InvalidBlogPostId(#[from] IdError),

    #[error("Invalid blog post: {0}")]
    InvalidField(#[from] TextError),

    #[error("Blog post not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
