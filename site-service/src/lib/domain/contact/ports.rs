use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::models::SubmitContactCommand;

/// Port for contact form service operations.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    async fn submit(&self, command: SubmitContactCommand) -> Result<ContactMessage, ContactError>;

    /// All submissions, newest first.
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactError>;

    /// # Errors
    /// * `NotFound` - Submission does not exist
    async fn delete_message(&self, id: &ContactId) -> Result<(), ContactError>;
}

/// Persistence operations for contact submissions.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, ContactError>;

    async fn list_all(&self) -> Result<Vec<ContactMessage>, ContactError>;

    /// # Errors
    /// * `NotFound` - Submission does not exist
    async fn delete(&self, id: &ContactId) -> Result<(), ContactError>;
}
