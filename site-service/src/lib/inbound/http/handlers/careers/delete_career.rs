use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::career::errors::CareerError;
use crate::domain::career::models::CareerId;
use crate::domain::career::ports::CareerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let career_id = CareerId::from_string(&id).map_err(CareerError::from)?;

    state.career_service.delete_career(&career_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Career deleted successfully"),
    ))
}
