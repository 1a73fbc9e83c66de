use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::contact::models::SubmitContactCommand;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ContactRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let command = SubmitContactCommand::new(body.username, body.email, body.message)?;

    state.contact_service.submit(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        MessageResponseData::new("Message sent successfully"),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactRequest {
    username: String,
    email: String,
    message: String,
}
