use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::application::ports::ApplicationServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn my_applications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<ApplicationResponseData>>, ApiError> {
    state
        .application_service
        .list_for_user(&user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|applications| {
            ApiSuccess::new(
                StatusCode::OK,
                applications.iter().map(ApplicationResponseData::from).collect(),
            )
        })
}
