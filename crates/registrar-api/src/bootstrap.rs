//! First-admin provisioning for a fresh deployment
//!
//! Self-registration never yields an admin, so the operator names one at
//! startup (`--bootstrap-admin` or `[auth] bootstrap_admin`) and supplies the
//! password through [`BOOTSTRAP_PASSWORD_ENV`].

use anyhow::Context;
use registrar_application::{ApplicationError, RegisterUserCommand, UserDto};
use registrar_domain::Role;

use crate::state::AppState;

/// Environment variable holding the bootstrap admin's password
pub const BOOTSTRAP_PASSWORD_ENV: &str = "REGISTRAR_BOOTSTRAP_PASSWORD";

/// Create the first admin unless one already exists
///
/// Returns `None` when an admin is already present, so restarts with the
/// same flags are harmless.
pub async fn ensure_admin(
    state: &AppState,
    username: &str,
    password: &str,
) -> anyhow::Result<Option<UserDto>> {
    let cmd = RegisterUserCommand {
        username: username.to_string(),
        password: password.to_string(),
        email: None,
        role: Role::Admin,
    };

    match state.accounts.bootstrap_admin(cmd).await {
        Ok(admin) => {
            tracing::info!(user = %admin.id, username = %admin.username, "bootstrap admin created");
            Ok(Some(admin))
        }
        Err(ApplicationError::Forbidden(_)) => {
            tracing::info!(username, "admin already present; skipping bootstrap");
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("bootstrapping admin {username}")),
    }
}
