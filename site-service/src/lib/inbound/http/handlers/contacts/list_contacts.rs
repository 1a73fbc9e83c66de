use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ContactResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ContactResponseData>>, ApiError> {
    state
        .contact_service
        .list_messages()
        .await
        .map_err(ApiError::from)
        .map(|messages| {
            ApiSuccess::new(
                StatusCode::OK,
                messages.iter().map(ContactResponseData::from).collect(),
            )
        })
}
