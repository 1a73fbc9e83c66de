use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::EmailStatusData;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let created = state
        .user_service
        .create_user(body.try_into_command()?)
        .await?;
    let user = &created.user;

    let claims = auth::Claims::for_user(
        user.id,
        user.username.as_str().to_string(),
        state.jwt_expiration_hours,
    );
    let token = state
        .authenticator
        .generate_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {e}")))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData {
            message: "Registration successful".to_string(),
            token,
            user_id: user.id.to_string(),
            email_status: created.welcome_email.into(),
        },
    ))
}

/// HTTP request body for self-registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: String,
    email: String,
    phone: String,
    password: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        Ok(CreateUserCommand::new(
            Username::new(self.username)?,
            EmailAddress::new(self.email)?,
            PhoneNumber::new(self.phone)?,
            Password::new(self.password)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseData {
    pub message: String,
    pub token: String,
    pub user_id: String,
    pub email_status: EmailStatusData,
}
