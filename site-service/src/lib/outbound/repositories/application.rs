use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::models::JobApplication;
use crate::domain::application::ports::ApplicationRepository;
use crate::domain::career::models::CareerId;
use crate::domain::models::RequiredText;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::UserId;

const APPLICATION_COLUMNS: &str = "id, job_id, user_id, full_name, email, phone, resume, \
     cover_letter, status, applied_at";

pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_application(row: &PgRow) -> Result<JobApplication, ApplicationError> {
        let db = |e: sqlx::Error| ApplicationError::DatabaseError(e.to_string());
        let status: String = row.try_get("status").map_err(db)?;

        Ok(JobApplication {
            id: ApplicationId(row.try_get("id").map_err(db)?),
            job_id: CareerId(row.try_get("job_id").map_err(db)?),
            user_id: UserId(row.try_get("user_id").map_err(db)?),
            full_name: RequiredText::from_trusted(row.try_get("full_name").map_err(db)?),
            email: EmailAddress::new(row.try_get("email").map_err(db)?)?,
            phone: PhoneNumber::new(row.try_get("phone").map_err(db)?)?,
            resume: row.try_get("resume").map_err(db)?,
            cover_letter: row.try_get("cover_letter").map_err(db)?,
            status: status.parse::<ApplicationStatus>()?,
            applied_at: row.try_get("applied_at").map_err(db)?,
        })
    }

    async fn fetch_where(
        &self,
        filter: &str,
        id: uuid::Uuid,
    ) -> Result<Vec<JobApplication>, ApplicationError> {
        let rows = sqlx::query(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM job_applications WHERE {filter} = $1 \
             ORDER BY applied_at DESC"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_application).collect()
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn create(
        &self,
        application: JobApplication,
    ) -> Result<JobApplication, ApplicationError> {
        sqlx::query(
            r#"
            INSERT INTO job_applications (id, job_id, user_id, full_name, email, phone, resume,
                                          cover_letter, status, applied_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(application.id.0)
        .bind(application.job_id.0)
        .bind(application.user_id.0)
        .bind(application.full_name.as_str())
        .bind(application.email.as_str())
        .bind(application.phone.as_str())
        .bind(&application.resume)
        .bind(application.cover_letter.as_deref())
        .bind(application.status.as_str())
        .bind(application.applied_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(application)
    }

    async fn list_all(&self) -> Result<Vec<JobApplication>, ApplicationError> {
        let rows = sqlx::query(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM job_applications ORDER BY applied_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_application).collect()
    }

    async fn list_by_job(
        &self,
        job_id: &CareerId,
    ) -> Result<Vec<JobApplication>, ApplicationError> {
        self.fetch_where("job_id", job_id.0).await
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<JobApplication>, ApplicationError> {
        self.fetch_where("user_id", user_id.0).await
    }

    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ApplicationError> {
        let row = sqlx::query(&format!(
            "UPDATE job_applications SET status = $2 WHERE id = $1 RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(id.0)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => Self::row_to_application(&row),
            None => Err(ApplicationError::NotFound(id.to_string())),
        }
    }
}
