//! Application layer services
//!
//! These services orchestrate domain entities and implement use cases.
//! All services are stateless and use constructor injection for dependencies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Services                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AccountService    - Registration, tokens, user admin        │
//! │  CatalogService    - Semesters and courses                   │
//! │  EnrollmentService - Add, drop, schedules and grading        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Non-Goals
//!
//! - Domain logic (belongs in Domain Layer)
//! - Direct I/O (belongs in Infrastructure Layer)

mod account_service;
mod catalog_service;
mod enrollment_service;

pub use account_service::AccountService;
pub use catalog_service::CatalogService;
pub use enrollment_service::EnrollmentService;
