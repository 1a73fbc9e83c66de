use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::career::errors::CareerError;
use crate::domain::career::models::CreateCareerCommand;
use crate::domain::career::ports::CareerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CareerResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_career(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCareerRequest>,
) -> Result<ApiSuccess<CareerResponseData>, ApiError> {
    state
        .career_service
        .create_career(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref career| ApiSuccess::new(StatusCode::CREATED, career.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCareerRequest {
    title: String,
    description: String,
    location: String,
    #[serde(default)]
    employment_type: Option<String>,
    #[serde(default)]
    salary_range: Option<String>,
    #[serde(default)]
    closing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    is_active: Option<bool>,
}

impl CreateCareerRequest {
    fn try_into_command(self) -> Result<CreateCareerCommand, CareerError> {
        CreateCareerCommand::new(
            self.title,
            self.description,
            self.location,
            self.employment_type,
            self.salary_range,
            self.closing_date,
            self.is_active,
        )
    }
}
