use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::applications;
use super::handlers::auth as auth_handlers;
use super::handlers::blogs;
use super::handlers::careers;
use super::handlers::contacts;
use super::handlers::services;
use super::handlers::users;
use super::middleware::authenticate;
use super::middleware::require_admin;
use super::rate_limit::rate_limit;
use super::rate_limit::RateLimiter;
use crate::domain::application::ports::ApplicationServicePort;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::career::ports::CareerServicePort;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::mail::ports::Mailer;
use crate::domain::user::ports::UserServicePort;
use crate::outbound::storage::resume::PUBLIC_PREFIX;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub blog_service: Arc<dyn BlogServicePort>,
    pub career_service: Arc<dyn CareerServicePort>,
    pub contact_service: Arc<dyn ContactServicePort>,
    pub application_service: Arc<dyn ApplicationServicePort>,
    pub catalog_service: Arc<dyn CatalogServicePort>,
    pub mailer: Arc<dyn Mailer>,
    pub authenticator: Arc<Authenticator>,
    pub rate_limiter: Arc<RateLimiter>,
    pub jwt_expiration_hours: i64,
    pub max_resume_bytes: usize,
}

pub fn create_router(
    state: AppState,
    cors_allowed_origins: &[String],
    resume_dir: &Path,
) -> Router {
    // Multipart framing adds overhead on top of the file itself; the exact
    // size limit is enforced when the resume is validated.
    let upload_limit = state.max_resume_bytes.saturating_mul(2);

    let public_routes = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/auth", get(auth_handlers::home))
        .route("/api/auth/register", post(auth_handlers::register))
        .route("/api/auth/login", post(auth_handlers::login))
        .route("/api/auth/test-email", post(auth_handlers::test_email))
        .route("/api/blogs", get(blogs::list_posts))
        .route("/api/careers", get(careers::list_careers))
        .route("/api/careers/:id", get(careers::get_career))
        .route("/api/form", post(contacts::submit_contact))
        .route("/api/form/contact", post(contacts::submit_contact))
        .route("/api/data/service", get(services::list_services));

    let authenticated_routes = Router::new()
        .route("/api/auth/user", get(auth_handlers::current_user))
        .route(
            "/api/applications",
            post(applications::submit_application)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/applications/my-applications",
            get(applications::my_applications),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Layers run bottom-up: `authenticate` first, then `require_admin`.
    let admin_routes = Router::new()
        .route("/api/admin/users", get(users::list_users).post(users::create_user))
        .route("/api/admin/users/:id", get(users::get_user))
        .route("/api/admin/users/update/:id", patch(users::update_user))
        .route("/api/admin/users/delete/:id", delete(users::delete_user))
        .route("/api/admin/contacts", get(contacts::list_contacts))
        .route(
            "/api/admin/contacts/delete/:id",
            delete(contacts::delete_contact),
        )
        .route(
            "/api/admin/blogs",
            get(blogs::list_posts).post(blogs::create_post),
        )
        .route("/api/admin/blogs/:id", delete(blogs::delete_post))
        .route(
            "/api/admin/careers",
            get(careers::list_careers).post(careers::create_career),
        )
        .route("/api/admin/careers/:id", delete(careers::delete_career))
        .route("/api/applications", get(applications::list_applications))
        .route(
            "/api/applications/job/:job_id",
            get(applications::list_job_applications),
        )
        .route(
            "/api/applications/:id/status",
            patch(applications::update_status),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(admin_routes)
        .nest_service(PUBLIC_PREFIX, ServeDir::new(resume_dir))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::new())
                .layer(CompressionLayer::new().gzip(true))
                .layer(trace_layer)
                .layer(cors_layer(cors_allowed_origins)),
        )
        .with_state(state)
}

/// Restrict CORS to the configured origins, or allow any origin when none
/// are configured.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::HEAD,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
