//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use registrar_domain::errors::DomainError;
use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A referenced row does not exist
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Unique key already held by another row
    #[error("Duplicate {entity_type}: {key}")]
    Duplicate {
        entity_type: &'static str,
        key: String,
    },
}

impl PersistenceError {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a duplicate-key error
    pub fn duplicate(entity_type: &'static str, key: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            key: key.into(),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { entity_type, id } => DomainError::EntityNotFound {
                entity_type: entity_type.to_string(),
                id,
            },
            PersistenceError::Duplicate { entity_type, key } => DomainError::EntityAlreadyExists {
                entity_type: entity_type.to_string(),
                key,
            },
        }
    }
}
