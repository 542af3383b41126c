//! Registrar Persistence Layer
//!
//! Infrastructure layer providing repository implementations for the domain.
//! This crate implements the repository interfaces and the enrollment guard
//! port defined in `registrar-domain`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                                                         │
//! │  ─────────                                                       │
//! │  InMemoryStore (users, tokens, semesters, courses, enrollments)  │
//! │  InMemory{User,Token,Semester,Course,Enrollment}Repository       │
//! │  InMemoryEnrollmentGuard                                         │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │  *Repository traits, EnrollmentGuard                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deletes cascade the way the relational schema does: a semester takes its
//! courses, a course takes its enrollments, a user takes their enrollments
//! and tokens and is cleared as teacher of any course.
//!
//! ## Usage
//!
//! ```ignore
//! use registrar_persistence::InMemoryRepositories;
//! use registrar_domain::repositories::CourseRepository;
//! use std::sync::Arc;
//!
//! let repos = InMemoryRepositories::new();
//! let courses: Arc<dyn CourseRepository> = repos.courses.clone();
//! ```

pub mod error;
pub mod memory;

pub use error::PersistenceError;

// Re-export commonly used types
pub use memory::{
    InMemoryCourseRepository, InMemoryEnrollmentGuard, InMemoryEnrollmentRepository,
    InMemoryRepositories, InMemorySemesterRepository, InMemoryStore, InMemoryTokenRepository,
    InMemoryUserRepository, StoreCounts,
};
