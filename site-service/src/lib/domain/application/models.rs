use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::errors::ApplicationStatusError;
use crate::domain::application::errors::ResumeError;
use crate::domain::career::models::CareerId;
use crate::domain::errors::IdError;
use crate::domain::models::optional_text;
use crate::domain::models::RequiredText;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::UserId;

/// Job application unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApplicationId(pub Uuid);

impl ApplicationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(ApplicationId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = ApplicationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(ApplicationStatus::Pending),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(ApplicationStatusError(other.to_string())),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job application aggregate.
///
/// `resume` is the public path of the stored file.
#[derive(Debug, Clone)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub job_id: CareerId,
    pub user_id: UserId,
    pub full_name: RequiredText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub resume: String,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Posting fields shown alongside an application in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: CareerId,
    pub title: String,
    pub location: String,
}

/// Account fields shown alongside an application in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Application with its posting and applicant resolved.
///
/// Either side is `None` when the referenced record has since been deleted.
#[derive(Debug, Clone)]
pub struct ApplicationDetails {
    pub application: JobApplication,
    pub job: Option<JobSummary>,
    pub applicant: Option<ApplicantSummary>,
}

/// Resume file received with an application, not yet stored.
#[derive(Clone)]
pub struct ResumeUpload {
    original_name: String,
    contents: Vec<u8>,
}

impl ResumeUpload {
    const ALLOWED_EXTENSIONS: [&'static str; 3] = ["pdf", "doc", "docx"];

    /// Validate an uploaded resume.
    ///
    /// # Errors
    /// * `UnsupportedType` - Extension is not .pdf, .doc or .docx
    /// * `TooLarge` - More than `max_bytes` bytes
    pub fn new(
        original_name: String,
        contents: Vec<u8>,
        max_bytes: usize,
    ) -> Result<Self, ResumeError> {
        let extension = Path::new(&original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if !Self::ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ResumeError::UnsupportedType(original_name));
        }
        if contents.len() > max_bytes {
            return Err(ResumeError::TooLarge {
                max: max_bytes,
                actual: contents.len(),
            });
        }

        Ok(Self {
            original_name,
            contents,
        })
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// File name under which the resume is stored:
    /// `<unix-millis>-<random hex>-<name>`, where `<name>` is the original
    /// base name with anything outside `[A-Za-z0-9._-]` replaced by `_`.
    /// The random segment keeps same-millisecond uploads of one file name
    /// from colliding.
    pub fn storage_name(&self, at: DateTime<Utc>) -> String {
        let base = self
            .original_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();

        let sanitized: String = base
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let nonce = Uuid::new_v4().simple().to_string();

        format!("{}-{}-{}", at.timestamp_millis(), &nonce[..8], sanitized)
    }
}

impl fmt::Debug for ResumeUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeUpload")
            .field("original_name", &self.original_name)
            .field("size", &self.contents.len())
            .finish()
    }
}

/// Location of a stored resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResume {
    pub file_name: String,
    pub public_path: String,
}

/// Command to apply for a job posting.
#[derive(Debug)]
pub struct SubmitApplicationCommand {
    pub job_id: CareerId,
    pub user_id: UserId,
    pub full_name: RequiredText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub cover_letter: Option<String>,
    pub resume: ResumeUpload,
}

impl SubmitApplicationCommand {
    const FULL_NAME_MAX: usize = 255;

    pub fn new(
        job_id: CareerId,
        user_id: UserId,
        full_name: String,
        email: String,
        phone: String,
        cover_letter: Option<String>,
        resume: ResumeUpload,
    ) -> Result<Self, ApplicationError> {
        Ok(Self {
            job_id,
            user_id,
            full_name: RequiredText::new("fullName", full_name, Self::FULL_NAME_MAX)?,
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
            cover_letter: optional_text(cover_letter),
            resume,
        })
    }
}
