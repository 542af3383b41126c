//! Per-(student, semester) serialization for enrollment changes

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use registrar_domain::{EnrollmentGuard, EnrollmentPermit, SemesterId, UserId};

type Key = (UserId, SemesterId);

/// Hands out one async mutex per (student, semester)
///
/// Different students, or the same student in different semesters, never
/// wait on each other.
#[derive(Debug, Default)]
pub struct InMemoryEnrollmentGuard {
    locks: Mutex<HashMap<Key, Arc<tokio::sync::Mutex<()>>>>,
}

impl InMemoryEnrollmentGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, key: Key) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        // Entries nobody holds or waits on can go.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.entry(key).or_default().clone()
    }
}

#[async_trait]
impl EnrollmentGuard for InMemoryEnrollmentGuard {
    async fn acquire(&self, student_id: UserId, semester_id: SemesterId) -> EnrollmentPermit {
        let lock = self.lock_for((student_id, semester_id));
        EnrollmentPermit::new(lock.lock_owned().await)
    }
}
