use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let post_id = BlogPostId::from_string(&id).map_err(BlogError::from)?;

    state.blog_service.delete_post(&post_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Blog post deleted successfully"),
    ))
}
