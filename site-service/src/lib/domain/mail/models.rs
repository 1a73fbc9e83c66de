use crate::domain::mail::errors::MailerError;
use crate::domain::user::models::EmailAddress;

/// Greeting sent to a newly created account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeEmail {
    pub recipient: EmailAddress,
    pub username: String,
}

/// Receipt for a message accepted by the mail server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub message_id: String,
}

/// Delivery outcome reported alongside a created account.
///
/// A failed delivery never fails account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailStatus {
    pub sent: bool,
    pub message_id: Option<String>,
    pub error: Option<String>,
    pub missing_vars: Vec<String>,
}

impl From<Result<SentEmail, MailerError>> for EmailStatus {
    fn from(result: Result<SentEmail, MailerError>) -> Self {
        match result {
            Ok(sent) => Self {
                sent: true,
                message_id: Some(sent.message_id),
                error: None,
                missing_vars: Vec::new(),
            },
            Err(e) => Self {
                sent: false,
                message_id: None,
                missing_vars: e.missing_vars().map(<[String]>::to_vec).unwrap_or_default(),
                error: Some(e.to_string()),
            },
        }
    }
}
