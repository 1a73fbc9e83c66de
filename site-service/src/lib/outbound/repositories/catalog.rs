use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::ServiceOffering;
use crate::domain::catalog::ports::CatalogRepository;

pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_all(&self) -> Result<Vec<ServiceOffering>, CatalogError> {
        let db = |e: sqlx::Error| CatalogError::DatabaseError(e.to_string());

        let rows = sqlx::query(
            r#"
            SELECT id, service, description, price, provider
            FROM service_offerings
            ORDER BY service
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db)?;

        rows.iter()
            .map(|r| {
                Ok(ServiceOffering {
                    id: r.try_get("id").map_err(db)?,
                    service: r.try_get("service").map_err(db)?,
                    description: r.try_get("description").map_err(db)?,
                    price: r.try_get("price").map_err(db)?,
                    provider: r.try_get("provider").map_err(db)?,
                })
            })
            .collect()
    }
}
