use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::errors::ResumeError;
use crate::domain::application::models::ResumeUpload;
use crate::domain::application::models::SubmitApplicationCommand;
use crate::domain::application::ports::ApplicationServicePort;
use crate::domain::career::models::CareerId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationEnvelope;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Multipart job application: text fields plus a `resume` file part.
pub async fn submit_application(
    State(state): State<AppState>,
    Extension(applicant): Extension<AuthenticatedUser>,
    multipart: Multipart,
) -> Result<ApiSuccess<ApplicationEnvelope>, ApiError> {
    let form = ApplicationForm::read(multipart).await?;
    let command = form.try_into_command(&applicant, state.max_resume_bytes)?;

    state
        .application_service
        .submit(command)
        .await
        .map_err(ApiError::from)
        .map(|ref application| {
            ApiSuccess::new(
                StatusCode::CREATED,
                ApplicationEnvelope {
                    success: true,
                    message: "Application submitted successfully!".to_string(),
                    data: application.into(),
                },
            )
        })
}

#[derive(Debug, Default)]
struct ApplicationForm {
    job_id: Option<String>,
    full_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    cover_letter: Option<String>,
    resume: Option<(String, Vec<u8>)>,
}

impl ApplicationForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resume" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let contents = field.bytes().await.map_err(malformed)?;
                    if !file_name.is_empty() || !contents.is_empty() {
                        form.resume = Some((file_name, contents.to_vec()));
                    }
                }
                "jobId" => form.job_id = Some(field.text().await.map_err(malformed)?),
                "fullName" => form.full_name = Some(field.text().await.map_err(malformed)?),
                "email" => form.email = Some(field.text().await.map_err(malformed)?),
                "phone" => form.phone = Some(field.text().await.map_err(malformed)?),
                "coverLetter" => form.cover_letter = Some(field.text().await.map_err(malformed)?),
                other => tracing::debug!(field = other, "Ignoring unknown multipart field"),
            }
        }

        Ok(form)
    }

    fn try_into_command(
        self,
        applicant: &AuthenticatedUser,
        max_resume_bytes: usize,
    ) -> Result<SubmitApplicationCommand, ApplicationError> {
        let (original_name, contents) = self.resume.ok_or(ResumeError::Missing)?;
        let resume = ResumeUpload::new(original_name, contents, max_resume_bytes)?;
        let job_id = CareerId::from_string(self.job_id.as_deref().unwrap_or_default().trim())?;

        SubmitApplicationCommand::new(
            job_id,
            applicant.user_id,
            self.full_name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.phone.unwrap_or_default(),
            self.cover_letter,
            resume,
        )
    }
}

fn malformed(e: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(format!("Malformed multipart body: {}", e.body_text()))
}
