#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use serde_json::json;
use site_service::domain::application::errors::ApplicationError;
use site_service::domain::application::models::ApplicationId;
use site_service::domain::application::models::ApplicationStatus;
use site_service::domain::application::models::JobApplication;
use site_service::domain::application::ports::ApplicationRepository;
use site_service::domain::application::service::ApplicationService;
use site_service::domain::blog::errors::BlogError;
use site_service::domain::blog::models::BlogPost;
use site_service::domain::blog::models::BlogPostId;
use site_service::domain::blog::ports::BlogRepository;
use site_service::domain::blog::service::BlogService;
use site_service::domain::career::errors::CareerError;
use site_service::domain::career::models::Career;
use site_service::domain::career::models::CareerId;
use site_service::domain::career::ports::CareerRepository;
use site_service::domain::career::service::CareerService;
use site_service::domain::catalog::errors::CatalogError;
use site_service::domain::catalog::models::ServiceOffering;
use site_service::domain::catalog::ports::CatalogRepository;
use site_service::domain::catalog::service::CatalogService;
use site_service::domain::contact::errors::ContactError;
use site_service::domain::contact::models::ContactId;
use site_service::domain::contact::models::ContactMessage;
use site_service::domain::contact::ports::ContactRepository;
use site_service::domain::contact::service::ContactService;
use site_service::domain::mail::errors::MailerError;
use site_service::domain::mail::models::SentEmail;
use site_service::domain::mail::models::WelcomeEmail;
use site_service::domain::mail::ports::Mailer;
use site_service::domain::user::errors::UserError;
use site_service::domain::user::models::DefaultAdmin;
use site_service::domain::user::models::EmailAddress;
use site_service::domain::user::models::Password;
use site_service::domain::user::models::PhoneNumber;
use site_service::domain::user::models::User;
use site_service::domain::user::models::UserId;
use site_service::domain::user::models::Username;
use site_service::domain::user::ports::UserRepository;
use site_service::domain::user::ports::UserServicePort;
use site_service::domain::user::service::UserService;
use site_service::inbound::http::rate_limit::RateLimiter;
use site_service::inbound::http::router::create_router;
use site_service::inbound::http::router::AppState;
use site_service::outbound::storage::DiskResumeStorage;
use tempfile::TempDir;
use uuid::Uuid;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const MAX_RESUME_BYTES: usize = 64 * 1024;
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-password";
pub const DEFAULT_RATE_LIMIT: u32 = 10_000;

/// Test application that spawns a real server over in-memory adapters
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub users: Arc<InMemoryUserRepository>,
    pub mailer: Arc<FakeMailer>,
    pub catalog: Arc<InMemoryCatalogRepository>,
    pub resume_dir: TempDir,
    user_service: Arc<UserService<InMemoryUserRepository, FakeMailer>>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_mailer(FakeMailer::delivering()).await
    }

    pub async fn spawn_with_mailer(mailer: FakeMailer) -> Self {
        Self::spawn_configured(mailer, DEFAULT_RATE_LIMIT).await
    }

    /// Spawn with a per-client request budget small enough to exhaust.
    pub async fn spawn_with_rate_limit(max_requests: u32) -> Self {
        Self::spawn_configured(FakeMailer::delivering(), max_requests).await
    }

    async fn spawn_configured(mailer: FakeMailer, max_requests: u32) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let resume_dir = tempfile::tempdir().expect("Failed to create resume dir");

        let users = Arc::new(InMemoryUserRepository::default());
        let careers = Arc::new(InMemoryCareerRepository::default());
        let catalog = Arc::new(InMemoryCatalogRepository::seeded());
        let mailer = Arc::new(mailer);

        let user_service = Arc::new(UserService::new(Arc::clone(&users), Arc::clone(&mailer)));

        let state = AppState {
            user_service: user_service.clone(),
            blog_service: Arc::new(BlogService::new(Arc::new(
                InMemoryBlogRepository::default(),
            ))),
            career_service: Arc::new(CareerService::new(Arc::clone(&careers))),
            contact_service: Arc::new(ContactService::new(Arc::new(
                InMemoryContactRepository::default(),
            ))),
            application_service: Arc::new(ApplicationService::new(
                Arc::new(InMemoryApplicationRepository::default()),
                careers,
                Arc::clone(&users),
                Arc::new(DiskResumeStorage::new(resume_dir.path())),
            )),
            catalog_service: Arc::new(CatalogService::new(
                Arc::clone(&catalog),
                Duration::from_secs(600),
            )),
            mailer: mailer.clone(),
            authenticator: Arc::new(
                Authenticator::new(JWT_SECRET).expect("Failed to create authenticator"),
            ),
            rate_limiter: Arc::new(RateLimiter::new(max_requests, Duration::from_secs(900))),
            jwt_expiration_hours: 24,
            max_resume_bytes: MAX_RESUME_BYTES,
        };

        let router = create_router(state, &[], resume_dir.path());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET).expect("Failed to create JWT handler"),
            users,
            mailer,
            catalog,
            resume_dir,
            user_service,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a regular account and return `(user_id, token)`.
    pub async fn register(&self, username: &str, email: &str) -> (String, String) {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": email,
                "phone": "5550100200",
                "password": "pass_word!"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        (
            body["userId"].as_str().unwrap().to_string(),
            body["token"].as_str().unwrap().to_string(),
        )
    }

    /// Create the default admin through the startup bootstrap path and log
    /// in. Returns `(user_id, token)`.
    pub async fn admin(&self) -> (String, String) {
        self.user_service
            .ensure_default_admin(DefaultAdmin {
                username: Username::new("Administrator".to_string()).unwrap(),
                email: EmailAddress::new(ADMIN_EMAIL.to_string()).unwrap(),
                phone: PhoneNumber::new("0000000000".to_string()).unwrap(),
                password: Password::new(ADMIN_PASSWORD.to_string()).unwrap(),
            })
            .await
            .expect("Failed to bootstrap admin");

        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    pub async fn login(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        (
            body["userId"].as_str().unwrap().to_string(),
            body["token"].as_str().unwrap().to_string(),
        )
    }

    /// Create a career posting as admin and return its id.
    pub async fn create_career(&self, admin_token: &str, title: &str) -> String {
        let response = self
            .post_authenticated("/api/admin/careers", admin_token)
            .json(&json!({
                "title": title,
                "description": "Build and run the site backend",
                "location": "Remote"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().unwrap().to_string()
    }
}

/// Mailer double that either accepts every message or behaves like an
/// unconfigured SMTP server.
pub struct FakeMailer {
    missing: Option<Vec<String>>,
    pub sent: Mutex<Vec<WelcomeEmail>>,
}

impl FakeMailer {
    pub fn delivering() -> Self {
        Self {
            missing: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            missing: Some(vec!["SMTP__HOST".to_string(), "SMTP__PASSWORD".to_string()]),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_to(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|email| email.recipient.to_string())
            .collect()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send_welcome(&self, email: &WelcomeEmail) -> Result<SentEmail, MailerError> {
        if let Some(missing) = &self.missing {
            return Err(MailerError::NotConfigured {
                missing: missing.clone(),
            });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(SentEmail {
            message_id: format!("<{}@example.com>", Uuid::new_v4()),
        })
    }

    async fn verify_connection(&self) -> Result<(), MailerError> {
        match &self.missing {
            Some(missing) => Err(MailerError::NotConfigured {
                missing: missing.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// User store enforcing email uniqueness like the `users_email_key` index.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn contains(&self, id: &str) -> bool {
        let id = UserId::from_string(id).unwrap();
        self.users.lock().unwrap().contains_key(&id)
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryBlogRepository {
    posts: Mutex<Vec<BlogPost>>,
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, BlogError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    async fn delete(&self, id: &BlogPostId) -> Result<(), BlogError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != *id);
        if posts.len() == before {
            return Err(BlogError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCareerRepository {
    careers: Mutex<Vec<Career>>,
}

#[async_trait]
impl CareerRepository for InMemoryCareerRepository {
    async fn create(&self, career: Career) -> Result<Career, CareerError> {
        self.careers.lock().unwrap().push(career.clone());
        Ok(career)
    }

    async fn find_by_id(&self, id: &CareerId) -> Result<Option<Career>, CareerError> {
        Ok(self
            .careers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == *id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Career>, CareerError> {
        let mut careers = self.careers.lock().unwrap().clone();
        careers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(careers)
    }

    async fn delete(&self, id: &CareerId) -> Result<(), CareerError> {
        let mut careers = self.careers.lock().unwrap();
        let before = careers.len();
        careers.retain(|c| c.id != *id);
        if careers.len() == before {
            return Err(CareerError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryContactRepository {
    messages: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, ContactError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, ContactError> {
        let mut messages = self.messages.lock().unwrap().clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ContactError> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != *id);
        if messages.len() == before {
            return Err(ContactError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<Vec<JobApplication>>,
}

impl InMemoryApplicationRepository {
    fn filtered(&self, keep: impl Fn(&JobApplication) -> bool) -> Vec<JobApplication> {
        let mut applications: Vec<JobApplication> = self
            .applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| keep(a))
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        applications
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn create(
        &self,
        application: JobApplication,
    ) -> Result<JobApplication, ApplicationError> {
        self.applications.lock().unwrap().push(application.clone());
        Ok(application)
    }

    async fn list_all(&self) -> Result<Vec<JobApplication>, ApplicationError> {
        Ok(self.filtered(|_| true))
    }

    async fn list_by_job(
        &self,
        job_id: &CareerId,
    ) -> Result<Vec<JobApplication>, ApplicationError> {
        Ok(self.filtered(|a| a.job_id == *job_id))
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<JobApplication>, ApplicationError> {
        Ok(self.filtered(|a| a.user_id == *user_id))
    }

    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ApplicationError> {
        let mut applications = self.applications.lock().unwrap();
        let application = applications
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or(ApplicationError::NotFound(id.to_string()))?;
        application.status = status;
        Ok(application.clone())
    }
}

/// Read-only catalog that counts how often it is queried.
pub struct InMemoryCatalogRepository {
    offerings: Vec<ServiceOffering>,
    pub reads: AtomicUsize,
}

impl InMemoryCatalogRepository {
    pub fn seeded() -> Self {
        Self {
            offerings: vec![
                ServiceOffering {
                    id: Uuid::new_v4(),
                    service: "Web Development".to_string(),
                    description: "Responsive business websites".to_string(),
                    price: "$1000".to_string(),
                    provider: "Studio".to_string(),
                },
                ServiceOffering {
                    id: Uuid::new_v4(),
                    service: "SEO".to_string(),
                    description: "Search engine optimisation".to_string(),
                    price: "$300".to_string(),
                    provider: "Studio".to_string(),
                },
            ],
            reads: AtomicUsize::new(0),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_all(&self) -> Result<Vec<ServiceOffering>, CatalogError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.offerings.clone())
    }
}
