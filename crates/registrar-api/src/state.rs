//! Application state for the API server

use std::sync::Arc;

use registrar_application::events::{EventPublisher, TracingEventPublisher};
use registrar_application::{AccountService, CatalogService, EnrollmentService};
use registrar_domain::Clock;
use registrar_persistence::{InMemoryEnrollmentGuard, InMemoryRepositories};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Registration, tokens and user administration
    pub accounts: Arc<AccountService>,
    /// Semesters and courses
    pub catalog: Arc<CatalogService>,
    /// Add, drop, schedules and grading
    pub enrollments: Arc<EnrollmentService>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state from already-built services
    pub fn new(
        accounts: Arc<AccountService>,
        catalog: Arc<CatalogService>,
        enrollments: Arc<EnrollmentService>,
    ) -> Self {
        Self {
            accounts,
            catalog,
            enrollments,
            start_time: std::time::Instant::now(),
        }
    }

    /// Wire every service over one in-memory store
    pub fn in_memory(clock: Arc<dyn Clock>, bcrypt_cost: u32) -> Self {
        Self::with_repositories(
            InMemoryRepositories::new(),
            clock,
            Arc::new(TracingEventPublisher),
            bcrypt_cost,
        )
    }

    /// Wire every service over existing repositories and an event sink
    pub fn with_repositories(
        repos: InMemoryRepositories,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
        bcrypt_cost: u32,
    ) -> Self {
        let accounts = AccountService::new(
            repos.users.clone(),
            repos.tokens.clone(),
            events.clone(),
            bcrypt_cost,
        );
        let catalog = CatalogService::new(
            repos.semesters.clone(),
            repos.courses.clone(),
            repos.enrollments.clone(),
            repos.users.clone(),
            clock.clone(),
            events.clone(),
        );
        let enrollments = EnrollmentService::new(
            repos.enrollments.clone(),
            repos.courses.clone(),
            repos.semesters.clone(),
            clock,
            Arc::new(InMemoryEnrollmentGuard::new()),
            events,
        );

        Self::new(Arc::new(accounts), Arc::new(catalog), Arc::new(enrollments))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
