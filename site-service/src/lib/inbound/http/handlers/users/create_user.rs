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
use crate::inbound::http::handlers::UserResponseData;
use crate::inbound::http::router::AppState;

/// Admin account creation. Unlike registration no token is issued.
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    let created = state
        .user_service
        .create_user(body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        CreateUserResponseData {
            message: "User created successfully".to_string(),
            user: (&created.user).into(),
            email_status: created.welcome_email.into(),
        },
    ))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    username: String,
    email: String,
    phone: String,
    password: String,
    #[serde(default)]
    is_admin: bool,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        Ok(CreateUserCommand::new(
            Username::new(self.username)?,
            EmailAddress::new(self.email)?,
            PhoneNumber::new(self.phone)?,
            Password::new(self.password)?,
        )
        .with_admin(self.is_admin))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponseData {
    pub message: String,
    pub user: UserResponseData,
    pub email_status: EmailStatusData,
}
