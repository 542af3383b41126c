//! User entity representing a student, teacher or admin

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{Role, UserId};

const MAX_USERNAME_LEN: usize = 150;

/// User entity representing a system user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    id: UserId,
    username: String,
    email: Option<String>,
    role: Role,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a pre-hashed password
    pub fn new(
        username: String,
        email: Option<String>,
        role: Role,
        password_hash: String,
    ) -> DomainResult<Self> {
        Self::validate_username(&username)?;
        Self::validate_email(email.as_deref())?;

        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            username,
            email,
            role,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get user ID
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Get username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get email
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Get role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Get the stored password hash
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Get created timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get updated timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Update username and email together
    pub fn update_profile(&mut self, username: String, email: Option<String>) -> DomainResult<()> {
        Self::validate_username(&username)?;
        Self::validate_email(email.as_deref())?;
        self.username = username;
        self.email = email;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Change role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Replace the password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    fn validate_username(username: &str) -> DomainResult<()> {
        if username.trim().is_empty() {
            return Err(DomainError::validation("username", "cannot be empty"));
        }
        if username.len() > MAX_USERNAME_LEN {
            return Err(DomainError::validation(
                "username",
                format!("cannot exceed {} characters", MAX_USERNAME_LEN),
            ));
        }
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(DomainError::validation(
                "username",
                "may contain only letters, digits and @/./+/-/_",
            ));
        }
        Ok(())
    }

    fn validate_email(email: Option<&str>) -> DomainResult<()> {
        if let Some(email) = email {
            if !email.contains('@') || !email.contains('.') {
                return Err(DomainError::validation("email", "Invalid email format"));
            }
        }
        Ok(())
    }
}
