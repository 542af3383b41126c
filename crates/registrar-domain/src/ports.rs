//! Ports the domain needs from its environment

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::value_objects::{SemesterId, UserId};

/// Source of the current instant
///
/// Eligibility checks read the clock once per call and reuse the value.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and demos
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write() = now;
    }

    /// Move forward (or backward, for negative durations)
    pub fn advance(&self, by: Duration) {
        *self.now.write() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}

/// Proof that the holder has exclusive access to one student's enrollments
/// in one semester; released on drop
pub struct EnrollmentPermit {
    _inner: Box<dyn Send + Sync>,
}

impl EnrollmentPermit {
    pub fn new<G: Send + Sync + 'static>(guard: G) -> Self {
        Self {
            _inner: Box::new(guard),
        }
    }
}

impl std::fmt::Debug for EnrollmentPermit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentPermit").finish_non_exhaustive()
    }
}

/// Serializes "load enrollments, validate, save" per (student, semester)
///
/// Without it two concurrent requests can both observe the same credit total
/// and jointly exceed the cap.
#[async_trait]
pub trait EnrollmentGuard: Send + Sync {
    async fn acquire(&self, student_id: UserId, semester_id: SemesterId) -> EnrollmentPermit;
}
