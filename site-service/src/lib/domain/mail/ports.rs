use async_trait::async_trait;

use crate::domain::mail::errors::MailerError;
use crate::domain::mail::models::SentEmail;
use crate::domain::mail::models::WelcomeEmail;

/// Outgoing mail delivery.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send the welcome message to a new account.
    ///
    /// # Errors
    /// * `NotConfigured` - Mail settings are incomplete
    /// * `InvalidAddress` - Sender or recipient rejected
    /// * `TransportFailed` - Server unreachable or refused the message
    async fn send_welcome(&self, email: &WelcomeEmail) -> Result<SentEmail, MailerError>;

    /// Check that the mail server accepts a connection with the configured
    /// credentials.
    async fn verify_connection(&self) -> Result<(), MailerError>;
}
