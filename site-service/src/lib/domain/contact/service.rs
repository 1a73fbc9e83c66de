use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::models::SubmitContactCommand;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::contact::ports::ContactServicePort;

/// Domain service implementation for the contact form.
pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn submit(&self, command: SubmitContactCommand) -> Result<ContactMessage, ContactError> {
        let message = ContactMessage {
            id: ContactId::new(),
            username: command.username,
            email: command.email,
            message: command.message,
            created_at: Utc::now(),
        };

        self.repository.create(message).await
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactError> {
        self.repository.list_all().await
    }

    async fn delete_message(&self, id: &ContactId) -> Result<(), ContactError> {
        self.repository.delete(id).await
    }
}
