pub mod applications;
pub mod auth;
pub mod blogs;
pub mod careers;
pub mod contacts;
pub mod services;
pub mod users;

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::ApplicantSummary;
use crate::domain::application::models::ApplicationDetails;
use crate::domain::application::models::JobApplication;
use crate::domain::application::models::JobSummary;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPost;
use crate::domain::career::errors::CareerError;
use crate::domain::career::models::Career;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::ServiceOffering;
use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactMessage;
use crate::domain::mail::models::EmailStatus;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

/// Successful response: the payload is serialized as the whole body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// JSON body extractor whose rejections render as `ApiError::BadRequest`.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    TooManyRequests(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::TooManyRequests(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(MessageResponseData { message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByEmail(_) => {
                ApiError::NotFound("User not found".to_string())
            }
            UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("Email already exists".to_string())
            }
            UserError::SelfDeletion => ApiError::BadRequest(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPhone(_)
            | UserError::Password(PasswordError::TooShort { .. })
            | UserError::Password(PasswordError::TooLong { .. }) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(PasswordError::HashingFailed(_))
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(_) => ApiError::NotFound("Blog post not found".to_string()),
            BlogError::InvalidBlogPostId(_) | BlogError::InvalidField(_) => {
                ApiError::BadRequest(err.to_string())
            }
            BlogError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CareerError> for ApiError {
    fn from(err: CareerError) -> Self {
        match err {
            CareerError::NotFound(_) => ApiError::NotFound("Career not found".to_string()),
            CareerError::InvalidCareerId(_)
            | CareerError::InvalidField(_)
            | CareerError::InvalidEmploymentType(_) => ApiError::BadRequest(err.to_string()),
            CareerError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::NotFound(_) => ApiError::NotFound("Contact not found".to_string()),
            ContactError::InvalidContactId(_)
            | ContactError::InvalidField(_)
            | ContactError::InvalidEmail(_) => ApiError::BadRequest(err.to_string()),
            ContactError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::JobNotFound(_) => ApiError::NotFound("Job not found".to_string()),
            ApplicationError::NotFound(_) => {
                ApiError::NotFound("Application not found".to_string())
            }
            ApplicationError::InvalidId(_)
            | ApplicationError::InvalidField(_)
            | ApplicationError::InvalidEmail(_)
            | ApplicationError::InvalidPhone(_)
            | ApplicationError::InvalidResume(_)
            | ApplicationError::InvalidStatus(_) => ApiError::BadRequest(err.to_string()),
            ApplicationError::StorageError(_) | ApplicationError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of an account. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            phone: user.phone.as_str().to_string(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailStatusData {
    pub sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_vars: Vec<String>,
}

impl From<EmailStatus> for EmailStatusData {
    fn from(status: EmailStatus) -> Self {
        Self {
            sent: status.sent,
            message_id: status.message_id,
            error: status.error,
            missing_vars: status.missing_vars,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponseData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&BlogPost> for BlogPostResponseData {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.to_string(),
            content: post.content.to_string(),
            author: post.author.to_string(),
            tags: post.tags.clone(),
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerResponseData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub salary_range: Option<String>,
    pub closing_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Career> for CareerResponseData {
    fn from(career: &Career) -> Self {
        Self {
            id: career.id.to_string(),
            title: career.title.to_string(),
            description: career.description.to_string(),
            location: career.location.to_string(),
            employment_type: career.employment_type.as_str().to_string(),
            salary_range: career.salary_range.clone(),
            closing_date: career.closing_date,
            is_active: career.is_active,
            created_at: career.created_at,
            updated_at: career.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&ContactMessage> for ContactResponseData {
    fn from(contact: &ContactMessage) -> Self {
        Self {
            id: contact.id.to_string(),
            username: contact.username.to_string(),
            email: contact.email.to_string(),
            message: contact.message.to_string(),
            created_at: contact.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponseData {
    pub id: String,
    pub job_id: String,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobSummaryData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ApplicantData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummaryData {
    pub id: String,
    pub title: String,
    pub location: String,
}

impl From<&JobSummary> for JobSummaryData {
    fn from(job: &JobSummary) -> Self {
        Self {
            id: job.id.to_string(),
            title: job.title.clone(),
            location: job.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantData {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&ApplicantSummary> for ApplicantData {
    fn from(applicant: &ApplicantSummary) -> Self {
        Self {
            id: applicant.id.to_string(),
            username: applicant.username.clone(),
            email: applicant.email.clone(),
        }
    }
}

impl From<&ApplicationDetails> for ApplicationResponseData {
    fn from(details: &ApplicationDetails) -> Self {
        Self {
            job: details.job.as_ref().map(JobSummaryData::from),
            user: details.applicant.as_ref().map(ApplicantData::from),
            ..Self::from(&details.application)
        }
    }
}

impl From<&JobApplication> for ApplicationResponseData {
    fn from(application: &JobApplication) -> Self {
        Self {
            id: application.id.to_string(),
            job_id: application.job_id.to_string(),
            user_id: application.user_id.to_string(),
            full_name: application.full_name.to_string(),
            email: application.email.to_string(),
            phone: application.phone.as_str().to_string(),
            resume: application.resume.clone(),
            cover_letter: application.cover_letter.clone(),
            status: application.status.as_str().to_string(),
            applied_at: application.applied_at,
            job: None,
            user: None,
        }
    }
}

/// Envelope used by the job application endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationEnvelope {
    pub success: bool,
    pub message: String,
    pub data: ApplicationResponseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOfferingData {
    pub id: String,
    pub service: String,
    pub description: String,
    pub price: String,
    pub provider: String,
}

impl From<&ServiceOffering> for ServiceOfferingData {
    fn from(offering: &ServiceOffering) -> Self {
        Self {
            id: offering.id.to_string(),
            service: offering.service.clone(),
            description: offering.description.clone(),
            price: offering.price.clone(),
            provider: offering.provider.clone(),
        }
    }
}
