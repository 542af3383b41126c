//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Every repository is a view over one shared [`InMemoryStore`].

mod course_repository;
mod enrollment_guard;
mod enrollment_repository;
mod semester_repository;
mod store;
mod token_repository;
mod user_repository;

use std::sync::Arc;

pub use course_repository::InMemoryCourseRepository;
pub use enrollment_guard::InMemoryEnrollmentGuard;
pub use enrollment_repository::InMemoryEnrollmentRepository;
pub use semester_repository::InMemorySemesterRepository;
pub use store::{InMemoryStore, StoreCounts};
pub use token_repository::InMemoryTokenRepository;
pub use user_repository::InMemoryUserRepository;

/// Every repository wired to the same store
#[derive(Debug, Clone)]
pub struct InMemoryRepositories {
    pub store: Arc<InMemoryStore>,
    pub users: Arc<InMemoryUserRepository>,
    pub tokens: Arc<InMemoryTokenRepository>,
    pub semesters: Arc<InMemorySemesterRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
    pub enrollments: Arc<InMemoryEnrollmentRepository>,
}

impl InMemoryRepositories {
    /// Build all repositories over a fresh store
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new(store.clone())),
            tokens: Arc::new(InMemoryTokenRepository::new(store.clone())),
            semesters: Arc::new(InMemorySemesterRepository::new(store.clone())),
            courses: Arc::new(InMemoryCourseRepository::new(store.clone())),
            enrollments: Arc::new(InMemoryEnrollmentRepository::new(store.clone())),
            store,
        }
    }
}

impl Default for InMemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}
