//! Account Application Service
//!
//! Registration, token issuance, token authentication and admin user
//! management.

use std::sync::Arc;

use chrono::Utc;

use registrar_domain::repositories::{TokenRepository, UserRepository};
use registrar_domain::{Role, User, UserId};

use crate::access::require_admin;
use crate::dto::{ObtainTokenCommand, RegisterUserCommand, TokenDto, UpdateUserCommand, UserDto};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::events::{ApplicationEvent, EventPublisher};

const MIN_PASSWORD_LEN: usize = 8;
const BAD_CREDENTIALS: &str = "Unable to log in with provided credentials.";
const BAD_TOKEN: &str = "Invalid token.";

/// Account Application Service
///
/// Stateless: users and tokens are persisted via repositories.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenRepository>,
    events: Arc<dyn EventPublisher>,
    bcrypt_cost: u32,
}

impl AccountService {
    /// Create a new AccountService with injected dependencies
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenRepository>,
        events: Arc<dyn EventPublisher>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            tokens,
            events,
            bcrypt_cost,
        }
    }

    /// Self-service registration
    ///
    /// Anonymous callers may create student and teacher accounts only;
    /// admins are created by other admins through [`Self::create_user`].
    pub async fn register(&self, cmd: RegisterUserCommand) -> ApplicationResult<UserDto> {
        if cmd.role.is_admin() {
            return Err(ApplicationError::Forbidden(
                "Admin accounts cannot be self-registered.".to_string(),
            ));
        }
        self.insert_user(cmd).await
    }

    /// Exchange username and password for the user's API token
    pub async fn obtain_token(&self, cmd: ObtainTokenCommand) -> ApplicationResult<TokenDto> {
        let user = self
            .users
            .find_by_username(&cmd.username)
            .await?
            .ok_or_else(|| ApplicationError::Unauthenticated(BAD_CREDENTIALS.to_string()))?;

        if !verify_password(cmd.password, user.password_hash().to_string()).await? {
            tracing::debug!(username = %cmd.username, "password mismatch");
            return Err(ApplicationError::Unauthenticated(BAD_CREDENTIALS.to_string()));
        }

        let token = self.tokens.get_or_create(&user.id()).await?;
        Ok(TokenDto {
            token,
            user_id: user.id().to_string(),
            email: user.email().map(str::to_string),
            role: user.role(),
        })
    }

    /// Resolve a presented token to its user
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<User> {
        let user_id = self
            .tokens
            .find_user_id(token)
            .await?
            .ok_or_else(|| ApplicationError::Unauthenticated(BAD_TOKEN.to_string()))?;

        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| ApplicationError::Unauthenticated(BAD_TOKEN.to_string()))
    }

    /// List every user (admin)
    pub async fn list_users(&self, actor: &User) -> ApplicationResult<Vec<UserDto>> {
        require_admin(actor)?;
        let mut users = self.users.find_all().await?;
        users.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(users.iter().map(UserDto::from_domain).collect())
    }

    /// Get one user (admin)
    pub async fn get_user(&self, actor: &User, id: &str) -> ApplicationResult<UserDto> {
        require_admin(actor)?;
        let user = self.load(id).await?;
        Ok(UserDto::from_domain(&user))
    }

    /// Create a user of any role (admin)
    pub async fn create_user(
        &self,
        actor: &User,
        cmd: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        require_admin(actor)?;
        self.insert_user(cmd).await
    }

    /// Create the first admin account
    ///
    /// Only succeeds while no admin exists; afterwards admins are created
    /// through [`Self::create_user`].
    pub async fn bootstrap_admin(&self, mut cmd: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let users = self.users.find_all().await?;
        if users.iter().any(|user| user.role().is_admin()) {
            return Err(ApplicationError::Forbidden(
                "An admin account already exists.".to_string(),
            ));
        }
        cmd.role = Role::Admin;
        self.insert_user(cmd).await
    }

    /// Update a user (admin)
    pub async fn update_user(
        &self,
        actor: &User,
        id: &str,
        cmd: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        require_admin(actor)?;
        let mut user = self.load(id).await?;

        if let Some(username) = &cmd.username {
            if username != user.username() {
                self.ensure_username_free(username).await?;
            }
        }
        let username = cmd.username.unwrap_or_else(|| user.username().to_string());
        let email = cmd.email.or_else(|| user.email().map(str::to_string));
        user.update_profile(username, email)?;

        if let Some(role) = cmd.role {
            user.set_role(role);
        }
        if let Some(password) = cmd.password {
            user.set_password_hash(self.hash_password(password).await?);
        }

        self.users.save(&user).await?;
        Ok(UserDto::from_domain(&user))
    }

    /// Delete a user (admin); their enrollments and tokens go with them
    pub async fn delete_user(&self, actor: &User, id: &str) -> ApplicationResult<()> {
        require_admin(actor)?;
        let user = self.load(id).await?;
        self.users.delete(&user.id()).await?;
        self.tokens.revoke(&user.id()).await?;

        self.events
            .publish(ApplicationEvent::UserDeleted {
                user_id: user.id().to_string(),
                timestamp: Utc::now(),
            })
            .await;
        Ok(())
    }

    async fn insert_user(&self, cmd: RegisterUserCommand) -> ApplicationResult<UserDto> {
        self.ensure_username_free(&cmd.username).await?;
        let hash = self.hash_password(cmd.password).await?;
        let user = User::new(cmd.username, cmd.email, cmd.role, hash)?;
        self.users.save(&user).await?;

        tracing::info!(user = %user.id(), role = %user.role(), "user registered");
        self.events
            .publish(ApplicationEvent::UserRegistered {
                user_id: user.id().to_string(),
                username: user.username().to_string(),
                role: user.role().to_string(),
                timestamp: Utc::now(),
            })
            .await;

        Ok(UserDto::from_domain(&user))
    }

    async fn ensure_username_free(&self, username: &str) -> ApplicationResult<()> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::UsernameTaken(username.to_string()));
        }
        Ok(())
    }

    async fn load(&self, id: &str) -> ApplicationResult<User> {
        let user_id = UserId::from_string(id)?;
        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| ApplicationError::UserNotFound(id.to_string()))
    }

    /// bcrypt runs on the blocking pool so request workers stay free
    async fn hash_password(&self, password: String) -> ApplicationResult<String> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApplicationError::ValidationFailed(format!(
                "password: must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        let cost = self.bcrypt_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(hashing_task_failed)??;
        Ok(hash)
    }
}

async fn verify_password(password: String, hash: String) -> ApplicationResult<bool> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(hashing_task_failed)??;
    Ok(matches)
}

fn hashing_task_failed(err: tokio::task::JoinError) -> ApplicationError {
    ApplicationError::HashingFailed(err.to_string())
}
