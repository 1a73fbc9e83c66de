use async_trait::async_trait;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::ApplicationDetails;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::models::JobApplication;
use crate::domain::application::models::StoredResume;
use crate::domain::application::models::SubmitApplicationCommand;
use crate::domain::career::models::CareerId;
use crate::domain::user::models::UserId;

/// Port for job application service operations.
#[async_trait]
pub trait ApplicationServicePort: Send + Sync + 'static {
    /// Store the resume and record the application.
    ///
    /// # Errors
    /// * `JobNotFound` - The posting does not exist
    /// * `StorageError` - Resume could not be written
    /// * `DatabaseError` - Database operation failed (the stored resume is removed)
    async fn submit(
        &self,
        command: SubmitApplicationCommand,
    ) -> Result<JobApplication, ApplicationError>;

    /// All applications, newest first, with posting and applicant resolved.
    async fn list_applications(&self) -> Result<Vec<ApplicationDetails>, ApplicationError>;

    async fn list_for_job(
        &self,
        job_id: &CareerId,
    ) -> Result<Vec<ApplicationDetails>, ApplicationError>;

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ApplicationDetails>, ApplicationError>;

    /// # Errors
    /// * `NotFound` - Application does not exist
    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ApplicationError>;
}

/// Persistence operations for job applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync + 'static {
    async fn create(&self, application: JobApplication)
        -> Result<JobApplication, ApplicationError>;

    /// All applications, newest first.
    async fn list_all(&self) -> Result<Vec<JobApplication>, ApplicationError>;

    async fn list_by_job(&self, job_id: &CareerId)
        -> Result<Vec<JobApplication>, ApplicationError>;

    async fn list_by_user(&self, user_id: &UserId)
        -> Result<Vec<JobApplication>, ApplicationError>;

    /// # Errors
    /// * `NotFound` - Application does not exist
    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ApplicationError>;
}

/// Storage for uploaded resume files.
#[async_trait]
pub trait ResumeStorage: Send + Sync + 'static {
    /// Write `contents` under `file_name`.
    async fn store(
        &self,
        file_name: &str,
        contents: &[u8],
    ) -> Result<StoredResume, ApplicationError>;

    /// Delete a previously stored resume.
    async fn remove(&self, resume: &StoredResume) -> Result<(), ApplicationError>;
}
