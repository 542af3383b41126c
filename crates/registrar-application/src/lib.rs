//! Registrar Application Layer
//!
//! The Application Layer implements use cases by orchestrating domain
//! entities, the eligibility rules and repository interfaces.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Services           │ DTOs                │ Access         │ Events     │
//! │  ─────────          │ ────                │ ──────         │ ──────     │
//! │  AccountService     │ RegisterUserCommand │ require_role   │ AppEvent   │
//! │  CatalogService     │ SemesterCommand     │                │ Publisher  │
//! │  EnrollmentService  │ EnrollmentDto       │                │            │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                                     │
//! │  Entities, Value Objects, Eligibility Rules, Repository Traits, Ports   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - **Use Case Orchestration**: look up, gate, persist
//! - **Authorization**: role checks per use case
//! - **DTO Mapping**: convert domain objects to presentation-safe DTOs
//! - **Application Events**: emit use-case-level events
//! - **Error Mapping**: translate domain errors to application-level errors

pub mod access;
pub mod dto;
pub mod errors;
pub mod events;
pub mod services;

// Re-export commonly used types
pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use events::{ApplicationEvent, EventPublisher};
pub use services::*;
