use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let contact_id = ContactId::from_string(&id).map_err(ContactError::from)?;

    state.contact_service.delete_message(&contact_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Contact deleted successfully"),
    ))
}
