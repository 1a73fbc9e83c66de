use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::ports::ApplicationServicePort;
use crate::domain::career::models::CareerId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_job_applications(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<ApiSuccess<Vec<ApplicationResponseData>>, ApiError> {
    let job_id = CareerId::from_string(&job_id).map_err(ApplicationError::from)?;

    state
        .application_service
        .list_for_job(&job_id)
        .await
        .map_err(ApiError::from)
        .map(|applications| {
            ApiSuccess::new(
                StatusCode::OK,
                applications.iter().map(ApplicationResponseData::from).collect(),
            )
        })
}
