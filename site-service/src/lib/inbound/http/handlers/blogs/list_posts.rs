use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BlogPostResponseData;
use crate::inbound::http::router::AppState;

/// Public and admin listing, newest publication first.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BlogPostResponseData>>, ApiError> {
    state
        .blog_service
        .list_posts()
        .await
        .map_err(ApiError::from)
        .map(|posts| {
            ApiSuccess::new(
                StatusCode::OK,
                posts.iter().map(BlogPostResponseData::from).collect(),
            )
        })
}
