use thiserror::Error;

/// Error for outgoing mail operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailerError {
    #[error("Email service is not configured (missing: {})", .missing.join(", "))]
    NotConfigured { missing: Vec<String> },

    #[error("Invalid mail address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build email: {0}")]
    BuildFailed(String),

    #[error("SMTP transport failed: {0}")]
    TransportFailed(String),
}

impl MailerError {
    /// Names of the settings that must be provided before mail can be sent.
    pub fn missing_vars(&self) -> Option<&[String]> {
        match self {
            MailerError::NotConfigured { missing } => Some(missing),
            _ => None,
        }
    }
}
