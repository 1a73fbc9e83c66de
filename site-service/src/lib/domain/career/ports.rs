use async_trait::async_trait;

use crate::domain::career::errors::CareerError;
use crate::domain::career::models::Career;
use crate::domain::career::models::CareerId;
use crate::domain::career::models::CreateCareerCommand;

/// Port for career domain service operations.
#[async_trait]
pub trait CareerServicePort: Send + Sync + 'static {
    async fn create_career(&self, command: CreateCareerCommand) -> Result<Career, CareerError>;

    /// # Errors
    /// * `NotFound` - Posting does not exist
    async fn get_career(&self, id: &CareerId) -> Result<Career, CareerError>;

    /// All postings, newest first.
    async fn list_careers(&self) -> Result<Vec<Career>, CareerError>;

    /// # Errors
    /// * `NotFound` - Posting does not exist
    async fn delete_career(&self, id: &CareerId) -> Result<(), CareerError>;
}

/// Persistence operations for job postings.
#[async_trait]
pub trait CareerRepository: Send + Sync + 'static {
    async fn create(&self, career: Career) -> Result<Career, CareerError>;

    async fn find_by_id(&self, id: &CareerId) -> Result<Option<Career>, CareerError>;

    /// All postings, newest first.
    async fn list_all(&self) -> Result<Vec<Career>, CareerError>;

    /// # Errors
    /// * `NotFound` - Posting does not exist
    async fn delete(&self, id: &CareerId) -> Result<(), CareerError>;
}
