use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::Authenticator;
use site_service::config::AdminConfig;
use site_service::config::Config;
use site_service::domain::application::service::ApplicationService;
use site_service::domain::blog::service::BlogService;
use site_service::domain::career::service::CareerService;
use site_service::domain::catalog::service::CatalogService;
use site_service::domain::contact::service::ContactService;
use site_service::domain::user::errors::UserError;
use site_service::domain::user::models::AdminBootstrap;
use site_service::domain::user::models::DefaultAdmin;
use site_service::domain::user::models::EmailAddress;
use site_service::domain::user::models::Password;
use site_service::domain::user::models::PhoneNumber;
use site_service::domain::user::models::Username;
use site_service::domain::user::ports::UserServicePort;
use site_service::domain::user::service::UserService;
use site_service::inbound::http::rate_limit::RateLimiter;
use site_service::inbound::http::router::create_router;
use site_service::inbound::http::router::AppState;
use site_service::outbound::email::SmtpMailer;
use site_service::outbound::repositories::PostgresApplicationRepository;
use site_service::outbound::repositories::PostgresBlogRepository;
use site_service::outbound::repositories::PostgresCareerRepository;
use site_service::outbound::repositories::PostgresCatalogRepository;
use site_service::outbound::repositories::PostgresContactRepository;
use site_service::outbound::repositories::PostgresUserRepository;
use site_service::outbound::storage::DiskResumeStorage;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "site-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        cors_allowed_origins = ?config.server.cors_allowed_origins,
        resume_dir = %config.uploads.resume_dir,
        rate_limit_max_requests = config.rate_limit.max_requests,
        rate_limit_window_seconds = config.rate_limit.window_seconds,
        "Configuration loaded"
    );

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())
            .context("JWT__SECRET must be set to a non-empty value")?,
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let mailer = Arc::new(SmtpMailer::new(&config.smtp)?);
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let career_repository = Arc::new(PostgresCareerRepository::new(pg_pool.clone()));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&mailer),
    ));
    let blog_service = Arc::new(BlogService::new(Arc::new(PostgresBlogRepository::new(
        pg_pool.clone(),
    ))));
    let career_service = Arc::new(CareerService::new(Arc::clone(&career_repository)));
    let contact_service = Arc::new(ContactService::new(Arc::new(
        PostgresContactRepository::new(pg_pool.clone()),
    )));
    let application_service = Arc::new(ApplicationService::new(
        Arc::new(PostgresApplicationRepository::new(pg_pool.clone())),
        career_repository,
        user_repository,
        Arc::new(DiskResumeStorage::new(&config.uploads.resume_dir)),
    ));
    let catalog_service = Arc::new(CatalogService::new(
        Arc::new(PostgresCatalogRepository::new(pg_pool)),
        Duration::from_secs(config.cache.services_ttl_seconds),
    ));

    bootstrap_admin(user_service.as_ref(), &config.admin).await;

    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit.max_requests,
        Duration::from_secs(config.rate_limit.window_seconds),
    ));

    let state = AppState {
        user_service,
        blog_service,
        career_service,
        contact_service,
        application_service,
        catalog_service,
        mailer,
        authenticator,
        rate_limiter,
        jwt_expiration_hours: config.jwt.expiration_hours,
        max_resume_bytes: config.uploads.max_resume_bytes,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        state,
        &config.server.cors_allowed_origins,
        Path::new(&config.uploads.resume_dir),
    );
    axum::serve(
        http_listener,
        http_application.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    tracing::info!("Server exited");

    Ok(())
}

/// Ensure the configured administrator exists. Never aborts startup.
async fn bootstrap_admin(user_service: &dyn UserServicePort, config: &AdminConfig) {
    let (Some(email), Some(password)) = (config.email.clone(), config.password.clone()) else {
        tracing::warn!("ADMIN__EMAIL or ADMIN__PASSWORD not set; skipping default admin");
        return;
    };

    let admin = match default_admin(config, email, password) {
        Ok(admin) => admin,
        Err(e) => {
            tracing::error!(error = %e, "Default admin settings are invalid");
            return;
        }
    };

    match user_service.ensure_default_admin(admin).await {
        Ok(AdminBootstrap::Created(user)) => {
            tracing::info!(user_id = %user.id, email = %user.email, "Default admin created")
        }
        Ok(AdminBootstrap::Promoted(user)) => {
            tracing::info!(user_id = %user.id, email = %user.email, "Existing user promoted to admin")
        }
        Ok(AdminBootstrap::AlreadyAdmin(user)) => {
            tracing::info!(user_id = %user.id, "Default admin already present")
        }
        Err(e) => tracing::error!(error = %e, "Failed to ensure default admin"),
    }
}

fn default_admin(
    config: &AdminConfig,
    email: String,
    password: String,
) -> Result<DefaultAdmin, UserError> {
    Ok(DefaultAdmin {
        username: Username::new(
            config
                .username
                .clone()
                .unwrap_or_else(|| "Administrator".to_string()),
        )?,
        email: EmailAddress::new(email)?,
        phone: PhoneNumber::new(
            config
                .phone
                .clone()
                .unwrap_or_else(|| "0000000000".to_string()),
        )?,
        password: Password::new(password)?,
    })
}
