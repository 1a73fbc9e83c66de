use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::contact::errors::ContactError;
use crate::domain::errors::IdError;
use crate::domain::models::RequiredText;
use crate::domain::user::models::EmailAddress;

/// Contact submission unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(ContactId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Message left through the public contact form.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: ContactId,
    pub username: RequiredText,
    pub email: EmailAddress,
    pub message: RequiredText,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SubmitContactCommand {
    pub username: RequiredText,
    pub email: EmailAddress,
    pub message: RequiredText,
}

impl SubmitContactCommand {
    const USERNAME_MAX: usize = 255;
    const MESSAGE_MAX: usize = 5_000;

    pub fn new(username: String, email: String, message: String) -> Result<Self, ContactError> {
        Ok(Self {
            username: RequiredText::new("username", username, Self::USERNAME_MAX)?,
            email: EmailAddress::new(email)?,
            message: RequiredText::new("message", message, Self::MESSAGE_MAX)?,
        })
    }
}
