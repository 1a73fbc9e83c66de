use thiserror::Error;

/// Error for services catalog operations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
