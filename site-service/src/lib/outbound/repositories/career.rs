use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::career::errors::CareerError;
use crate::domain::career::models::Career;
use crate::domain::career::models::CareerId;
use crate::domain::career::models::EmploymentType;
use crate::domain::career::ports::CareerRepository;
use crate::domain::models::RequiredText;

const CAREER_COLUMNS: &str = "id, title, description, location, employment_type, salary_range, \
     closing_date, is_active, created_at, updated_at";

pub struct PostgresCareerRepository {
    pool: PgPool,
}

impl PostgresCareerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_career(row: &PgRow) -> Result<Career, CareerError> {
        let db = |e: sqlx::Error| CareerError::DatabaseError(e.to_string());
        let employment_type: String = row.try_get("employment_type").map_err(db)?;

        Ok(Career {
            id: CareerId(row.try_get("id").map_err(db)?),
            title: RequiredText::from_trusted(row.try_get("title").map_err(db)?),
            description: RequiredText::from_trusted(row.try_get("description").map_err(db)?),
            location: RequiredText::from_trusted(row.try_get("location").map_err(db)?),
            employment_type: employment_type.parse::<EmploymentType>()?,
            salary_range: row.try_get("salary_range").map_err(db)?,
            closing_date: row.try_get("closing_date").map_err(db)?,
            is_active: row.try_get("is_active").map_err(db)?,
            created_at: row.try_get("created_at").map_err(db)?,
            updated_at: row.try_get("updated_at").map_err(db)?,
        })
    }
}

#[async_trait]
impl CareerRepository for PostgresCareerRepository {
    async fn create(&self, career: Career) -> Result<Career, CareerError> {
        sqlx::query(
            r#"
            INSERT INTO careers (id, title, description, location, employment_type, salary_range,
                                 closing_date, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(career.id.0)
        .bind(career.title.as_str())
        .bind(career.description.as_str())
        .bind(career.location.as_str())
        .bind(career.employment_type.as_str())
        .bind(career.salary_range.as_deref())
        .bind(career.closing_date)
        .bind(career.is_active)
        .bind(career.created_at)
        .bind(career.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CareerError::DatabaseError(e.to_string()))?;

        Ok(career)
    }

    async fn find_by_id(&self, id: &CareerId) -> Result<Option<Career>, CareerError> {
        let row = sqlx::query(&format!("SELECT {CAREER_COLUMNS} FROM careers WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CareerError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_career).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Career>, CareerError> {
        let rows = sqlx::query(&format!(
            "SELECT {CAREER_COLUMNS} FROM careers ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CareerError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_career).collect()
    }

    async fn delete(&self, id: &CareerId) -> Result<(), CareerError> {
        let result = sqlx::query("DELETE FROM careers WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CareerError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CareerError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
