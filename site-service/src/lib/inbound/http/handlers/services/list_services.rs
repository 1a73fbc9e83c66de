use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ServiceOfferingData;
use crate::inbound::http::router::AppState;

/// Services catalog, served from the TTL cache when warm.
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ServicesResponseData>, ApiError> {
    let offerings = state.catalog_service.list_services().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ServicesResponseData {
            msg: offerings.iter().map(ServiceOfferingData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesResponseData {
    pub msg: Vec<ServiceOfferingData>,
}
