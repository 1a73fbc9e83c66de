use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::IdError;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::PhoneError;
use crate::domain::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered account. The password hash never leaves the
/// domain: HTTP responses are built from the other fields only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Trimmed display name of 3 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 255;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 3 characters after trimming
    /// * `TooLong` - More than 255 characters after trimming
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = username.trim();
        let length = username.chars().count();

        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username.to_string()))
        }
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Lookups compare
/// the stored value exactly, so no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_string();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number value type
///
/// 7 to 20 characters of digits, spaces, `+`, `-`, `(` and `)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MIN_LENGTH: usize = 7;
    const MAX_LENGTH: usize = 20;

    /// # Errors
    /// * `TooShort` / `TooLong` - Length outside 7..=20
    /// * `InvalidCharacters` - Anything but digits, spaces and `+-()`
    pub fn new(phone: String) -> Result<Self, PhoneError> {
        let phone = phone.trim();
        let length = phone.chars().count();

        if length < Self::MIN_LENGTH {
            return Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
        {
            return Err(PhoneError::InvalidCharacters);
        }

        Ok(Self(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password accepted by the password policy.
///
/// Only ever held long enough to be hashed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 7;
    const MAX_LENGTH: usize = 1024;

    /// # Errors
    /// * `TooShort` - Fewer than 7 characters
    /// * `TooLong` - More than 1024 characters
    pub fn new(password: String) -> Result<Self, PasswordError> {
        let length = password.chars().count();

        if length < Self::MIN_LENGTH {
            Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PasswordError::TooLong {
                max: Self::MAX_LENGTH,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub password: Password,
    pub is_admin: bool,
}

impl CreateUserCommand {
    /// Construct a command for a regular (non-admin) account.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `phone` - Validated phone number
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(
        username: Username,
        email: EmailAddress,
        phone: PhoneNumber,
        password: Password,
    ) -> Self {
        Self {
            username,
            email,
            phone,
            password,
            is_admin: false,
        }
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// Command to update an existing user with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub username: Option<Username>,
    pub email: Option<EmailAddress>,
    pub phone: Option<PhoneNumber>,
    pub password: Option<Password>,
    pub is_admin: Option<bool>,
}

/// Administrator account that must exist after startup.
#[derive(Debug)]
pub struct DefaultAdmin {
    pub username: Username,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub password: Password,
}

/// Outcome of ensuring the default administrator.
#[derive(Debug, Clone)]
pub enum AdminBootstrap {
    Created(User),
    Promoted(User),
    AlreadyAdmin(User),
}
