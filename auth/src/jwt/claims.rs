use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token payload.
///
/// Tokens are self-contained: nothing about them is persisted server side,
/// so a token stays valid until `exp` unless the signing secret changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Display name of the subject at issuance time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Claims {
    /// Create claims for user authentication with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username copied into the token
    /// * `expiration_hours` - Hours until token expires
    pub fn for_user(user_id: impl ToString, username: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            username: Some(username),
        }
    }

    /// Claims with explicit timestamps.
    pub fn with_timestamps(sub: impl ToString, iat: i64, exp: i64) -> Self {
        Self {
            sub: sub.to_string(),
            iat,
            exp,
            username: None,
        }
    }
}
