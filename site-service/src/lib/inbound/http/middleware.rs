use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity attached to the request by [`authenticate`].
///
/// Built from the stored user record, so the admin flag is always current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            phone: user.phone.as_str().to_string(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Middleware that validates JWT tokens and adds the caller's identity to
/// request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).map_err(IntoResponse::into_response)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        unauthorized("Invalid or expired token")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user ID");
        unauthorized("Invalid token format")
    })?;

    let user = state.user_service.get_user(&user_id).await.map_err(|e| match e {
        UserError::NotFound(_) => {
            tracing::warn!(user_id = %user_id, "Token subject no longer exists");
            unauthorized("User not found")
        }
        other => ApiError::from(other).into_response(),
    })?;

    req.extensions_mut().insert(AuthenticatedUser::from(&user));

    Ok(next.run(req).await)
}

/// Middleware that only lets administrators through.
///
/// Must run after [`authenticate`].
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let Some(user) = req.extensions().get::<AuthenticatedUser>() else {
        tracing::error!("Admin gate reached without an authenticated user");
        return Err(unauthorized("Authentication required"));
    };

    if !user.is_admin {
        tracing::warn!(user_id = %user.user_id, "Non-admin user denied");
        return Err(ApiError::Forbidden("Access denied. Admin privileges required".to_string())
            .into_response());
    }

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )),
    }
}
