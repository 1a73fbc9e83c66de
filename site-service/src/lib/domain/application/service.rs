use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::ApplicantSummary;
use crate::domain::application::models::ApplicationDetails;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::models::JobApplication;
use crate::domain::application::models::JobSummary;
use crate::domain::application::models::SubmitApplicationCommand;
use crate::domain::application::ports::ApplicationRepository;
use crate::domain::application::ports::ApplicationServicePort;
use crate::domain::application::ports::ResumeStorage;
use crate::domain::career::models::CareerId;
use crate::domain::career::ports::CareerRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for job applications.
///
/// Reads postings through the career repository to reject applications for
/// unknown jobs before anything is written. Listings resolve each
/// application's posting and applicant through the career and user
/// repositories.
pub struct ApplicationService<AR, CR, UR, RS>
where
    AR: ApplicationRepository,
    CR: CareerRepository,
    UR: UserRepository,
    RS: ResumeStorage,
{
    repository: Arc<AR>,
    careers: Arc<CR>,
    users: Arc<UR>,
    storage: Arc<RS>,
}

impl<AR, CR, UR, RS> ApplicationService<AR, CR, UR, RS>
where
    AR: ApplicationRepository,
    CR: CareerRepository,
    UR: UserRepository,
    RS: ResumeStorage,
{
    pub fn new(
        repository: Arc<AR>,
        careers: Arc<CR>,
        users: Arc<UR>,
        storage: Arc<RS>,
    ) -> Self {
        Self {
            repository,
            careers,
            users,
            storage,
        }
    }

    /// Attach posting and applicant summaries, looking each one up once.
    async fn with_details(
        &self,
        applications: Vec<JobApplication>,
    ) -> Result<Vec<ApplicationDetails>, ApplicationError> {
        let mut jobs: HashMap<CareerId, Option<JobSummary>> = HashMap::new();
        let mut applicants: HashMap<UserId, Option<ApplicantSummary>> = HashMap::new();
        let mut details = Vec::with_capacity(applications.len());

        for application in applications {
            if !jobs.contains_key(&application.job_id) {
                let job = self
                    .careers
                    .find_by_id(&application.job_id)
                    .await
                    .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
                    .map(|career| JobSummary {
                        id: career.id,
                        title: career.title.as_str().to_string(),
                        location: career.location.as_str().to_string(),
                    });
                jobs.insert(application.job_id, job);
            }

            if !applicants.contains_key(&application.user_id) {
                let applicant = self
                    .users
                    .find_by_id(&application.user_id)
                    .await
                    .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
                    .map(|user| ApplicantSummary {
                        id: user.id,
                        username: user.username.as_str().to_string(),
                        email: user.email.as_str().to_string(),
                    });
                applicants.insert(application.user_id, applicant);
            }

            details.push(ApplicationDetails {
                job: jobs.get(&application.job_id).cloned().flatten(),
                applicant: applicants.get(&application.user_id).cloned().flatten(),
                application,
            });
        }

        Ok(details)
    }
}

#[async_trait]
impl<AR, CR, UR, RS> ApplicationServicePort for ApplicationService<AR, CR, UR, RS>
where
    AR: ApplicationRepository,
    CR: CareerRepository,
    UR: UserRepository,
    RS: ResumeStorage,
{
    async fn submit(
        &self,
        command: SubmitApplicationCommand,
    ) -> Result<JobApplication, ApplicationError> {
        self.careers
            .find_by_id(&command.job_id)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
            .ok_or(ApplicationError::JobNotFound(command.job_id.to_string()))?;

        let applied_at = Utc::now();
        let file_name = command.resume.storage_name(applied_at);
        let stored = self
            .storage
            .store(&file_name, command.resume.contents())
            .await?;

        let application = JobApplication {
            id: ApplicationId::new(),
            job_id: command.job_id,
            user_id: command.user_id,
            full_name: command.full_name,
            email: command.email,
            phone: command.phone,
            resume: stored.public_path.clone(),
            cover_letter: command.cover_letter,
            status: ApplicationStatus::Pending,
            applied_at,
        };

        match self.repository.create(application).await {
            Ok(created) => {
                tracing::info!(
                    application_id = %created.id,
                    job_id = %created.job_id,
                    "Job application submitted"
                );
                Ok(created)
            }
            Err(e) => {
                if let Err(cleanup) = self.storage.remove(&stored).await {
                    tracing::warn!(
                        file = %stored.file_name,
                        error = %cleanup,
                        "Failed to remove orphaned resume"
                    );
                }
                Err(e)
            }
        }
    }

    async fn list_applications(&self) -> Result<Vec<ApplicationDetails>, ApplicationError> {
        let applications = self.repository.list_all().await?;
        self.with_details(applications).await
    }

    async fn list_for_job(
        &self,
        job_id: &CareerId,
    ) -> Result<Vec<ApplicationDetails>, ApplicationError> {
        let applications = self.repository.list_by_job(job_id).await?;
        self.with_details(applications).await
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ApplicationDetails>, ApplicationError> {
        let applications = self.repository.list_by_user(user_id).await?;
        self.with_details(applications).await
    }

    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ApplicationError> {
        self.repository.update_status(id, status).await
    }
}
