use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::career::ports::CareerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CareerResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_careers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CareerResponseData>>, ApiError> {
    state
        .career_service
        .list_careers()
        .await
        .map_err(ApiError::from)
        .map(|careers| {
            ApiSuccess::new(
                StatusCode::OK,
                careers.iter().map(CareerResponseData::from).collect(),
            )
        })
}
