use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPost;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::models::CreateBlogPostCommand;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// Publish a new post.
    async fn create_post(&self, command: CreateBlogPostCommand) -> Result<BlogPost, BlogError>;

    /// All posts, most recently published first.
    async fn list_posts(&self) -> Result<Vec<BlogPost>, BlogError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn delete_post(&self, id: &BlogPostId) -> Result<(), BlogError>;
}

/// Persistence operations for blog posts.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, BlogError>;

    /// All posts, most recently published first.
    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn delete(&self, id: &BlogPostId) -> Result<(), BlogError>;
}
