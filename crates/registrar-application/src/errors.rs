//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API consumption. They wrap domain errors with additional context.

use registrar_domain::errors::DomainError;
use registrar_domain::EnrollmentRejection;
use thiserror::Error;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    // === Validation Errors ===
    /// Input validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    // === Access Errors ===
    /// Missing or unknown credentials
    #[error("Authentication failed: {0}")]
    Unauthenticated(String),

    /// Authenticated actor lacks the required role
    #[error("Permission denied: {0}")]
    Forbidden(String),

    // === Not Found Errors ===
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Semester not found: {0}")]
    SemesterNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Enrollment not found: {0}")]
    EnrollmentNotFound(String),

    // === Conflict Errors ===
    /// Username already registered
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// Student already holds a seat in the course
    #[error("Already enrolled in course: {0}")]
    AlreadyEnrolled(String),

    // === Business Rule Violations ===
    /// The eligibility gate refused the change
    #[error("{0}")]
    EnrollmentRejected(EnrollmentRejection),

    /// Business rule violation
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),

    // === Infrastructure Errors ===
    /// Repository operation failed
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Password hashing failed
    #[error("Credential hashing failed: {0}")]
    HashingFailed(String),

    // === Domain Error Wrapper ===
    /// Wrapped domain error
    #[error("Domain error: {0}")]
    DomainError(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError { field, reason } => {
                ApplicationError::ValidationFailed(format!("{}: {}", field, reason))
            }
            DomainError::InvalidId {
                entity_type, value, ..
            } => ApplicationError::ValidationFailed(format!(
                "Invalid {} id: {}",
                entity_type.to_lowercase(),
                value
            )),
            DomainError::BusinessRuleViolation { rule } => {
                ApplicationError::BusinessRuleViolation(rule)
            }
            DomainError::EnrollmentRejected(rejection) => {
                ApplicationError::EnrollmentRejected(rejection)
            }
            DomainError::EntityNotFound { entity_type, id } => match entity_type.as_str() {
                "User" => ApplicationError::UserNotFound(id),
                "Semester" => ApplicationError::SemesterNotFound(id),
                "Course" => ApplicationError::CourseNotFound(id),
                "Enrollment" => ApplicationError::EnrollmentNotFound(id),
                _ => ApplicationError::RepositoryError(format!("{} {} not found", entity_type, id)),
            },
            DomainError::EntityAlreadyExists { entity_type, key } if entity_type == "User" => {
                ApplicationError::UsernameTaken(key)
            }
            other => ApplicationError::DomainError(other.to_string()),
        }
    }
}

impl From<EnrollmentRejection> for ApplicationError {
    fn from(rejection: EnrollmentRejection) -> Self {
        ApplicationError::EnrollmentRejected(rejection)
    }
}

impl From<bcrypt::BcryptError> for ApplicationError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApplicationError::HashingFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ApplicationError::ValidationFailed("name is required".into());
        assert_eq!(err.to_string(), "Validation failed: name is required");
    }

    #[test]
    fn test_rejection_displays_bare_message() {
        let err = ApplicationError::EnrollmentRejected(EnrollmentRejection::RegistrationClosed);
        assert_eq!(err.to_string(), "Course registration is not currently open.");
    }

    #[test]
    fn test_domain_error_conversion() {
        let domain_err = DomainError::validation("credits", "must be positive");
        let app_err: ApplicationError = domain_err.into();
        assert!(matches!(app_err, ApplicationError::ValidationFailed(_)));
    }

    #[test]
    fn test_not_found_conversion_keeps_entity() {
        let app_err: ApplicationError = DomainError::not_found("Course", "c-1").into();
        assert_eq!(app_err, ApplicationError::CourseNotFound("c-1".into()));
    }

    #[test]
    fn test_conflict_and_rule_conversions() {
        let taken: ApplicationError = DomainError::EntityAlreadyExists {
            entity_type: "User".into(),
            key: "ada".into(),
        }
        .into();
        assert_eq!(taken, ApplicationError::UsernameTaken("ada".into()));

        let rule: ApplicationError = DomainError::BusinessRuleViolation {
            rule: "frozen".into(),
        }
        .into();
        assert_eq!(rule, ApplicationError::BusinessRuleViolation("frozen".into()));

        let other: ApplicationError = DomainError::EntityAlreadyExists {
            entity_type: "Course".into(),
            key: "c-1".into(),
        }
        .into();
        assert!(matches!(other, ApplicationError::DomainError(_)));
    }
}
