use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::ServiceOffering;

/// Port for services catalog operations.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// All offerings. May be served from a cache up to its time-to-live old.
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, CatalogError>;
}

/// Persistence operations for the services catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<ServiceOffering>, CatalogError>;
}
