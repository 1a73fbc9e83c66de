use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn current_user(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<CurrentUserResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        CurrentUserResponseData {
            user_data: UserResponseData {
                id: user.user_id.to_string(),
                username: user.username,
                email: user.email,
                phone: user.phone,
                is_admin: user.is_admin,
                created_at: user.created_at,
                updated_at: user.updated_at,
            },
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponseData {
    pub user_data: UserResponseData,
}
