use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::IdError;
use crate::domain::errors::TextError;
use crate::domain::models::RequiredText;

/// Blog post unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogPostId(pub Uuid);

impl BlogPostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(BlogPostId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BlogPostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlogPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Published article shown on the public blog.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: RequiredText,
    pub content: RequiredText,
    pub author: RequiredText,
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to publish a blog post.
#[derive(Debug)]
pub struct CreateBlogPostCommand {
    pub title: RequiredText,
    pub content: RequiredText,
    pub author: RequiredText,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateBlogPostCommand {
    const TITLE_MAX: usize = 255;
    const CONTENT_MAX: usize = 100_000;
    const AUTHOR_MAX: usize = 255;

    /// Validate raw input into a command.
    ///
    /// Tags are trimmed and blank tags dropped. Without `published_at` the
    /// post is published at creation time.
    pub fn new(
        title: String,
        content: String,
        author: String,
        tags: Vec<String>,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<Self, TextError> {
        Ok(Self {
            title: RequiredText::new("title", title, Self::TITLE_MAX)?,
            content: RequiredText::new("content", content, Self::CONTENT_MAX)?,
            author: RequiredText::new("author", author, Self::AUTHOR_MAX)?,
            tags: tags
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            published_at,
        })
    }
}
