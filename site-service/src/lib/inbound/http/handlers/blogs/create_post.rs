use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::CreateBlogPostCommand;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BlogPostResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreatePostRequest>,
) -> Result<ApiSuccess<BlogPostResponseData>, ApiError> {
    let command = CreateBlogPostCommand::new(
        body.title,
        body.content,
        body.author,
        body.tags,
        body.published_at,
    )
    .map_err(BlogError::from)?;

    state
        .blog_service
        .create_post(command)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    title: String,
    content: String,
    author: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}
