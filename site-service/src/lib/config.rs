use std::env;

use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;

/// One year.
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    pub uploads: UploadsConfig,
    pub cache: CacheConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// An empty secret is rejected when the authenticator is built.
    #[serde(default)]
    pub secret: String,
    pub expiration_hours: i64,
}

/// Outgoing mail settings. Every field is optional so the service can run
/// without mail; the mailer reports which ones are missing.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub sender_email: Option<String>,
    pub sender_name: Option<String>,
}

/// Account ensured at startup when both email and password are set.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminConfig {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    pub resume_dir: String,
    pub max_resume_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    pub services_ttl_seconds: u64,
}

/// Per-client-IP request budget over a fixed window.
#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_seconds: u64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, SMTP__HOST, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = Self::with_defaults()?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_allowed_origins"),
            )
            .build()?;

        let config: Self = configuration.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Built-in defaults overlaid with a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = Self::with_defaults()?
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later, at request time.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {MAX_JWT_EXPIRATION_HOURS}, got {}",
                self.jwt.expiration_hours
            )));
        }
        if self.rate_limit.max_requests == 0 || self.rate_limit.window_seconds == 0 {
            return Err(ConfigError::Message(
                "rate_limit.max_requests and rate_limit.window_seconds must be positive"
                    .to_string(),
            ));
        }
        Ok(())
    }

    fn with_defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        ConfigBuilder::builder()
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 5000)?
            .set_default("jwt.expiration_hours", 720)?
            .set_default("smtp.port", 587)?
            .set_default("admin.username", "Administrator")?
            .set_default("admin.phone", "0000000000")?
            .set_default("uploads.resume_dir", "uploads/resumes")?
            .set_default("uploads.max_resume_bytes", 5 * 1024 * 1024)?
            .set_default("cache.services_ttl_seconds", 600)?
            .set_default("rate_limit.max_requests", 100)?
            .set_default("rate_limit.window_seconds", 15 * 60)
    }
}
