use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::application::ports::ApplicationServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ApplicationResponseData>>, ApiError> {
    state
        .application_service
        .list_applications()
        .await
        .map_err(ApiError::from)
        .map(|applications| {
            ApiSuccess::new(
                StatusCode::OK,
                applications.iter().map(ApplicationResponseData::from).collect(),
            )
        })
}
