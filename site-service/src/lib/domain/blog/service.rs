use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPost;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::models::CreateBlogPostCommand;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::blog::ports::BlogServicePort;

/// Domain service implementation for blog operations.
pub struct BlogService<BR>
where
    BR: BlogRepository,
{
    repository: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BlogServicePort for BlogService<BR>
where
    BR: BlogRepository,
{
    async fn create_post(&self, command: CreateBlogPostCommand) -> Result<BlogPost, BlogError> {
        let now = Utc::now();
        let post = BlogPost {
            id: BlogPostId::new(),
            title: command.title,
            content: command.content,
            author: command.author,
            tags: command.tags,
            published_at: command.published_at.unwrap_or(now),
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(post).await?;
        tracing::info!(post_id = %created.id, "Blog post created");

        Ok(created)
    }

    async fn list_posts(&self) -> Result<Vec<BlogPost>, BlogError> {
        self.repository.list_all().await
    }

    async fn delete_post(&self, id: &BlogPostId) -> Result<(), BlogError> {
        self.repository.delete(id).await
    }
}
