use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::career::errors::CareerError;
use crate::domain::career::models::Career;
use crate::domain::career::models::CareerId;
use crate::domain::career::models::CreateCareerCommand;
use crate::domain::career::ports::CareerRepository;
use crate::domain::career::ports::CareerServicePort;

/// Domain service implementation for job postings.
pub struct CareerService<CR>
where
    CR: CareerRepository,
{
    repository: Arc<CR>,
}

impl<CR> CareerService<CR>
where
    CR: CareerRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CareerServicePort for CareerService<CR>
where
    CR: CareerRepository,
{
    async fn create_career(&self, command: CreateCareerCommand) -> Result<Career, CareerError> {
        let now = Utc::now();
        let career = Career {
            id: CareerId::new(),
            title: command.title,
            description: command.description,
            location: command.location,
            employment_type: command.employment_type,
            salary_range: command.salary_range,
            closing_date: command.closing_date,
            is_active: command.is_active,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(career).await?;
        tracing::info!(career_id = %created.id, "Career posting created");

        Ok(created)
    }

    async fn get_career(&self, id: &CareerId) -> Result<Career, CareerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CareerError::NotFound(id.to_string()))
    }

    async fn list_careers(&self) -> Result<Vec<Career>, CareerError> {
        self.repository.list_all().await
    }

    async fn delete_career(&self, id: &CareerId) -> Result<(), CareerError> {
        self.repository.delete(id).await
    }
}
