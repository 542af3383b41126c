//! Account-related DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use registrar_domain::{Role, User};

/// Command to create a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub role: Role,
}

/// Command to exchange credentials for a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObtainTokenCommand {
    pub username: String,
    pub password: String,
}

/// Command to update a user; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub password: Option<String>,
}

/// User DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    /// Create from domain entity
    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().map(str::to_string),
            role: user.role(),
            created_at: user.created_at(),
        }
    }
}

/// Issued token plus the identity it represents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenDto {
    pub token: String,
    pub user_id: String,
    pub email: Option<String>,
    pub role: Role,
}
