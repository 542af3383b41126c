//! Role-based access checks shared by the services

use registrar_domain::{Role, User};

use crate::errors::{ApplicationError, ApplicationResult};

/// Message returned for every role failure
pub const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

/// Fail with [`ApplicationError::Forbidden`] unless `actor` holds one of `roles`
pub fn require_role(actor: &User, roles: &[Role]) -> ApplicationResult<()> {
    if roles.contains(&actor.role()) {
        Ok(())
    } else {
        tracing::debug!(
            user = %actor.id(),
            role = %actor.role(),
            required = ?roles,
            "role check failed"
        );
        Err(ApplicationError::Forbidden(PERMISSION_DENIED.to_string()))
    }
}

pub fn require_admin(actor: &User) -> ApplicationResult<()> {
    require_role(actor, &[Role::Admin])
}

pub fn require_staff(actor: &User) -> ApplicationResult<()> {
    require_role(actor, &[Role::Teacher, Role::Admin])
}
