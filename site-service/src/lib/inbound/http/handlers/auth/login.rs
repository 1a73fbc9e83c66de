use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

const UNKNOWN_ACCOUNT: &str = "Invalid credentials";
const WRONG_PASSWORD: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::BadRequest(UNKNOWN_ACCOUNT.to_string()))?;

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => ApiError::BadRequest(UNKNOWN_ACCOUNT.to_string()),
            other => ApiError::from(other),
        })?;

    let claims = auth::Claims::for_user(
        user.id,
        user.username.as_str().to_string(),
        state.jwt_expiration_hours,
    );

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                tracing::info!(user_id = %user.id, "Login rejected: wrong password");
                ApiError::Unauthorized(WRONG_PASSWORD.to_string())
            }
            other => ApiError::InternalServerError(format!("Login failed: {other}")),
        })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login successful".to_string(),
            token: result.access_token,
            user_id: user.id.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
    pub user_id: String,
}
