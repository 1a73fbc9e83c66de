use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::ports::ApplicationServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationEnvelope;
use crate::inbound::http::router::AppState;

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateStatusRequest>,
) -> Result<ApiSuccess<ApplicationEnvelope>, ApiError> {
    let application_id = ApplicationId::from_string(&id).map_err(ApplicationError::from)?;
    let status = body
        .status
        .trim()
        .parse::<ApplicationStatus>()
        .map_err(ApplicationError::from)?;

    state
        .application_service
        .update_status(&application_id, status)
        .await
        .map_err(ApiError::from)
        .map(|ref application| {
            ApiSuccess::new(
                StatusCode::OK,
                ApplicationEnvelope {
                    success: true,
                    message: "Application status updated".to_string(),
                    data: application.into(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateStatusRequest {
    status: String,
}
