use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::models::RequiredText;
use crate::domain::user::models::EmailAddress;

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &PgRow) -> Result<ContactMessage, ContactError> {
        let db = |e: sqlx::Error| ContactError::DatabaseError(e.to_string());

        Ok(ContactMessage {
            id: ContactId(row.try_get("id").map_err(db)?),
            username: RequiredText::from_trusted(row.try_get("username").map_err(db)?),
            email: EmailAddress::new(row.try_get("email").map_err(db)?)?,
            message: RequiredText::from_trusted(row.try_get("message").map_err(db)?),
            created_at: row.try_get("created_at").map_err(db)?,
        })
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, ContactError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, username, email, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id.0)
        .bind(message.username.as_str())
        .bind(message.email.as_str())
        .bind(message.message.as_str())
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(message)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, ContactError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_message).collect()
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ContactError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
