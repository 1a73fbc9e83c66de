use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::mail::errors::MailerError;
use crate::domain::mail::models::WelcomeEmail;
use crate::domain::mail::ports::Mailer;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

const DEFAULT_USERNAME: &str = "Test User";

/// Mail diagnostics: checks the SMTP connection, then sends a welcome email
/// to the given address.
pub async fn test_email(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TestEmailRequest>,
) -> Result<ApiSuccess<TestEmailResponseData>, Response> {
    let recipient = EmailAddress::new(body.email)
        .map_err(|e| ApiError::BadRequest(format!("Invalid email: {e}")).into_response())?;

    state
        .mailer
        .verify_connection()
        .await
        .map_err(|e| TestEmailFailure::new("Email server connection failed", e).into_response())?;

    let email = WelcomeEmail {
        recipient,
        username: body
            .username
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
    };
    let sent = state
        .mailer
        .send_welcome(&email)
        .await
        .map_err(|e| TestEmailFailure::new("Failed to send test email", e).into_response())?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TestEmailResponseData {
            message: format!("Test email sent to {}", email.recipient),
            message_id: sent.message_id,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestEmailRequest {
    email: String,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestEmailResponseData {
    pub message: String,
    pub message_id: String,
}

/// Diagnostic failure body. Unlike other 500 responses it carries the mail
/// error, since reporting it is the endpoint's purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestEmailFailure {
    message: String,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing_vars: Option<Vec<String>>,
}

impl TestEmailFailure {
    fn new(message: &str, error: MailerError) -> Self {
        tracing::warn!(error = %error, "{message}");
        Self {
            message: message.to_string(),
            missing_vars: error.missing_vars().map(<[String]>::to_vec),
            error: error.to_string(),
        }
    }
}

impl IntoResponse for TestEmailFailure {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
