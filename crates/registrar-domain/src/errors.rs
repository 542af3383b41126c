//! Domain errors for Registrar

use thiserror::Error;

use crate::eligibility::EnrollmentRejection;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Invalid identifier for {entity_type}: {value}")]
    InvalidId { entity_type: String, value: String },

    #[error("Business rule violation: {rule}")]
    BusinessRuleViolation { rule: String },

    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound { entity_type: String, id: String },

    #[error("Entity already exists: {entity_type} {key}")]
    EntityAlreadyExists { entity_type: String, key: String },

    #[error("Enrollment rejected: {0}")]
    EnrollmentRejected(EnrollmentRejection),
}

impl DomainError {
    /// Shorthand for a field validation failure
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a missing entity
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

impl From<EnrollmentRejection> for DomainError {
    fn from(rejection: EnrollmentRejection) -> Self {
        Self::EnrollmentRejected(rejection)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = DomainError::validation("credits", "must be positive");
        assert_eq!(
            err.to_string(),
            "Validation error: credits - must be positive"
        );
    }

    #[test]
    fn test_rejection_conversion() {
        let err: DomainError = EnrollmentRejection::NotAStudent.into();
        assert!(matches!(
            err,
            DomainError::EnrollmentRejected(EnrollmentRejection::NotAStudent)
        ));
    }
}
