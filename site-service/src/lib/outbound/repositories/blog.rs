use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPost;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::models::RequiredText;

pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &PgRow) -> Result<BlogPost, BlogError> {
        let db = |e: sqlx::Error| BlogError::DatabaseError(e.to_string());

        Ok(BlogPost {
            id: BlogPostId(row.try_get("id").map_err(db)?),
            title: RequiredText::from_trusted(row.try_get("title").map_err(db)?),
            content: RequiredText::from_trusted(row.try_get("content").map_err(db)?),
            author: RequiredText::from_trusted(row.try_get("author").map_err(db)?),
            tags: row.try_get("tags").map_err(db)?,
            published_at: row.try_get("published_at").map_err(db)?,
            created_at: row.try_get("created_at").map_err(db)?,
            updated_at: row.try_get("updated_at").map_err(db)?,
        })
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (id, title, content, author, tags, published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.id.0)
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.author.as_str())
        .bind(&post.tags)
        .bind(post.published_at)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, author, tags, published_at, created_at, updated_at
            FROM blog_posts
            ORDER BY published_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn delete(&self, id: &BlogPostId) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
