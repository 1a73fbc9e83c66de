use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::career::errors::CareerError;
use crate::domain::career::errors::EmploymentTypeError;
use crate::domain::errors::IdError;
use crate::domain::models::optional_text;
use crate::domain::models::RequiredText;

/// Job posting unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CareerId(pub Uuid);

impl CareerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(CareerId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CareerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CareerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = EmploymentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Full-time" => Ok(EmploymentType::FullTime),
            "Part-time" => Ok(EmploymentType::PartTime),
            "Contract" => Ok(EmploymentType::Contract),
            "Internship" => Ok(EmploymentType::Internship),
            other => Err(EmploymentTypeError(other.to_string())),
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job posting aggregate.
#[derive(Debug, Clone)]
pub struct Career {
    pub id: CareerId,
    pub title: RequiredText,
    pub description: RequiredText,
    pub location: RequiredText,
    pub employment_type: EmploymentType,
    pub salary_range: Option<String>,
    pub closing_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to open a job posting.
#[derive(Debug)]
pub struct CreateCareerCommand {
    pub title: RequiredText,
    pub description: RequiredText,
    pub location: RequiredText,
    pub employment_type: EmploymentType,
    pub salary_range: Option<String>,
    pub closing_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl CreateCareerCommand {
    const TITLE_MAX: usize = 255;
    const DESCRIPTION_MAX: usize = 20_000;
    const LOCATION_MAX: usize = 255;

    /// Validate raw input into a command.
    ///
    /// Missing employment type means Full-time; missing `is_active` means the
    /// posting is open.
    pub fn new(
        title: String,
        description: String,
        location: String,
        employment_type: Option<String>,
        salary_range: Option<String>,
        closing_date: Option<DateTime<Utc>>,
        is_active: Option<bool>,
    ) -> Result<Self, CareerError> {
        let employment_type = match optional_text(employment_type) {
            Some(raw) => raw.parse::<EmploymentType>()?,
            None => EmploymentType::default(),
        };

        Ok(Self {
            title: RequiredText::new("title", title, Self::TITLE_MAX)?,
            description: RequiredText::new("description", description, Self::DESCRIPTION_MAX)?,
            location: RequiredText::new("location", location, Self::LOCATION_MAX)?,
            employment_type,
            salary_range: optional_text(salary_range),
            closing_date,
            is_active: is_active.unwrap_or(true),
        })
    }
}
