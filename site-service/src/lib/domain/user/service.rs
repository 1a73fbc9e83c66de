use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::mail::models::EmailStatus;
use crate::domain::mail::models::WelcomeEmail;
use crate::domain::mail::ports::Mailer;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AdminBootstrap;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::DefaultAdmin;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::CreatedUser;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR, M>
where
    UR: UserRepository,
    M: Mailer,
{
    repository: Arc<UR>,
    mailer: Arc<M>,
    password_hasher: auth::PasswordHasher,
}

impl<UR, M> UserService<UR, M>
where
    UR: UserRepository,
    M: Mailer,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `mailer` - Welcome email delivery
    pub fn new(repository: Arc<UR>, mailer: Arc<M>) -> Self {
        Self {
            repository,
            mailer,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash(&self, password: &Password) -> Result<String, UserError> {
        self.password_hasher
            .hash(password.expose())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()).into())
    }

    async fn insert(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            password_hash: self.hash(&command.password)?,
            username: command.username,
            email: command.email,
            phone: command.phone,
            is_admin: command.is_admin,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }
}

#[async_trait]
impl<UR, M> UserServicePort for UserService<UR, M>
where
    UR: UserRepository,
    M: Mailer,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<CreatedUser, UserError> {
        let user = self.insert(command).await?;

        let welcome = WelcomeEmail {
            recipient: user.email.clone(),
            username: user.username.as_str().to_string(),
        };
        let delivery = self.mailer.send_welcome(&welcome).await;
        if let Err(e) = &delivery {
            tracing::warn!(
                user_id = %user.id,
                error = %e,
                "Failed to send welcome email"
            );
        }

        Ok(CreatedUser {
            user,
            welcome_email: EmailStatus::from(delivery),
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_phone) = command.phone {
            user.phone = new_phone;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.hash(&new_password)?;
        }

        if let Some(is_admin) = command.is_admin {
            user.is_admin = is_admin;
        }

        user.updated_at = Utc::now();

        self.repository.update(user).await
    }

    async fn delete_user(&self, actor: &UserId, id: &UserId) -> Result<(), UserError> {
        if actor == id {
            return Err(UserError::SelfDeletion);
        }

        self.repository.delete(id).await
    }

    async fn ensure_default_admin(
        &self,
        admin: DefaultAdmin,
    ) -> Result<AdminBootstrap, UserError> {
        match self.repository.find_by_email(admin.email.as_str()).await? {
            Some(user) if user.is_admin => Ok(AdminBootstrap::AlreadyAdmin(user)),
            Some(mut user) => {
                user.is_admin = true;
                user.updated_at = Utc::now();
                self.repository
                    .update(user)
                    .await
                    .map(AdminBootstrap::Promoted)
            }
            None => {
                let command =
                    CreateUserCommand::new(admin.username, admin.email, admin.phone, admin.password)
                        .with_admin(true);
                self.insert(command).await.map(AdminBootstrap::Created)
            }
        }
    }
}
