use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::Address;
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;
use uuid::Uuid;

use crate::config::SmtpConfig;
use crate::domain::mail::errors::MailerError;
use crate::domain::mail::models::SentEmail;
use crate::domain::mail::models::WelcomeEmail;
use crate::domain::mail::ports::Mailer;

const DEFAULT_PORT: u16 = 587;
const DEFAULT_SENDER_NAME: &str = "Site Team";
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

enum Transport {
    Ready {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        sender: Mailbox,
    },
    Unconfigured {
        missing: Vec<String>,
    },
}

/// SMTP mailer using STARTTLS.
///
/// Incomplete settings do not prevent startup: every send then fails with
/// `NotConfigured`, naming the settings that are missing.
pub struct SmtpMailer {
    transport: Transport,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let missing = missing_settings(config);
        if !missing.is_empty() {
            tracing::warn!(missing = ?missing, "SMTP is not configured; emails will not be sent");
            return Ok(Self {
                transport: Transport::Unconfigured { missing },
            });
        }

        // Presence checked above.
        let (Some(host), Some(username), Some(password)) = (
            config.host.as_deref().map(clean),
            config.username.as_deref().map(clean),
            config.password.as_deref().map(clean),
        ) else {
            return Err(MailerError::NotConfigured { missing });
        };

        let sender_email = config
            .sender_email
            .as_deref()
            .map(clean)
            .unwrap_or(username);
        let sender_name = config
            .sender_name
            .as_deref()
            .map(clean)
            .unwrap_or(DEFAULT_SENDER_NAME);
        let address = sender_email
            .parse::<Address>()
            .map_err(|e| MailerError::InvalidAddress(format!("{sender_email}: {e}")))?;

        let port = config.port.unwrap_or(DEFAULT_PORT);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailerError::TransportFailed(e.to_string()))?
            .port(port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .timeout(Some(CONNECTION_TIMEOUT))
            .build();

        tracing::info!(host, port, sender = sender_email, "SMTP mailer configured");

        Ok(Self {
            transport: Transport::Ready {
                transport,
                sender: Mailbox::new(Some(sender_name.to_string()), address),
            },
        })
    }

    fn ready(&self) -> Result<(&AsyncSmtpTransport<Tokio1Executor>, &Mailbox), MailerError> {
        match &self.transport {
            Transport::Ready { transport, sender } => Ok((transport, sender)),
            Transport::Unconfigured { missing } => Err(MailerError::NotConfigured {
                missing: missing.clone(),
            }),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_welcome(&self, email: &WelcomeEmail) -> Result<SentEmail, MailerError> {
        let (transport, sender) = self.ready()?;

        let recipient = email
            .recipient
            .as_str()
            .parse::<Address>()
            .map_err(|e| MailerError::InvalidAddress(format!("{}: {e}", email.recipient)))?;
        let message_id = format!("<{}@{}>", Uuid::new_v4(), sender.email.domain());
        let brand = sender.name.as_deref().unwrap_or(DEFAULT_SENDER_NAME);

        let message = Message::builder()
            .from(sender.clone())
            .to(Mailbox::new(Some(email.username.clone()), recipient))
            .subject(format!("Welcome to {brand} - Registration Successful!"))
            .message_id(Some(message_id.clone()))
            .multipart(MultiPart::alternative_plain_html(
                welcome_text(&email.username, brand),
                welcome_html(&email.username, brand),
            ))
            .map_err(|e| MailerError::BuildFailed(e.to_string()))?;

        let response = transport.send(message).await.map_err(|e| {
            tracing::error!(error = %e, recipient = %email.recipient, "Failed to send welcome email");
            MailerError::TransportFailed(e.to_string())
        })?;

        tracing::info!(
            recipient = %email.recipient,
            message_id = %message_id,
            code = %response.code(),
            "Welcome email sent"
        );

        Ok(SentEmail { message_id })
    }

    async fn verify_connection(&self) -> Result<(), MailerError> {
        let (transport, _) = self.ready()?;

        match transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailerError::TransportFailed(
                "SMTP server did not accept the connection".to_string(),
            )),
            Err(e) => Err(MailerError::TransportFailed(e.to_string())),
        }
    }
}

fn missing_settings(config: &SmtpConfig) -> Vec<String> {
    [
        ("SMTP__HOST", &config.host),
        ("SMTP__USERNAME", &config.username),
        ("SMTP__PASSWORD", &config.password),
    ]
    .into_iter()
    .filter(|(_, value)| value.as_deref().map(clean).unwrap_or("").is_empty())
    .map(|(name, _)| name.to_string())
    .collect()
}

/// Strip surrounding whitespace and one pair of quotes left by `.env` files.
fn clean(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix(['"', '\''])
        .and_then(|v| v.strip_suffix(['"', '\'']))
        .unwrap_or(value)
}

fn welcome_text(username: &str, brand: &str) -> String {
    format!(
        "Welcome to {brand}!\n\n\
         Hello {username}!\n\n\
         Thank you for registering with us. Your account has been successfully created.\n\
         You can now log in and start exploring everything we have to offer.\n\n\
         If you have any questions, please don't hesitate to contact our support team.\n\n\
         Best regards,\n\
         {brand}\n"
    )
}

fn welcome_html(username: &str, brand: &str) -> String {
    let username = escape_html(username);
    let brand = escape_html(brand);
    format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="background-color: #4CAF50; color: white; padding: 20px; text-align: center;">Welcome to {brand}!</h1>
    <h2>Hello {username}!</h2>
    <p>Thank you for registering with us. Your account has been successfully created.</p>
    <p>You can now log in and start exploring everything we have to offer.</p>
    <p>If you have any questions, please don't hesitate to contact our support team.</p>
    <p>Best regards,<br>{brand}</p>
    <p style="text-align: center; color: #666; font-size: 12px;">This is an automated email. Please do not reply to this message.</p>
  </div>
</body>
</html>"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
