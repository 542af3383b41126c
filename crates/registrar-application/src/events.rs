//! Application layer events
//!
//! Application events represent use-case-level facts that are significant
//! to external consumers (audit logs, notifications). They are emitted after
//! a use case completes or is refused.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use registrar_domain::EnrollmentRejection;

/// Application-level event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ApplicationEvent {
    // === Account Events ===
    /// A user account was created
    UserRegistered {
        user_id: String,
        username: String,
        role: String,
        timestamp: DateTime<Utc>,
    },

    /// A user account was removed
    UserDeleted {
        user_id: String,
        timestamp: DateTime<Utc>,
    },

    // === Catalog Events ===
    SemesterCreated {
        semester_id: String,
        name: String,
        timestamp: DateTime<Utc>,
    },

    SemesterDeleted {
        semester_id: String,
        timestamp: DateTime<Utc>,
    },

    CourseCreated {
        course_id: String,
        semester_id: String,
        credits: u32,
        timestamp: DateTime<Utc>,
    },

    CourseDeleted {
        course_id: String,
        timestamp: DateTime<Utc>,
    },

    // === Enrollment Events ===
    /// A student was enrolled in a course
    EnrollmentCreated {
        enrollment_id: String,
        student_id: String,
        course_id: String,
        timestamp: DateTime<Utc>,
    },

    /// A student dropped a course
    EnrollmentDropped {
        enrollment_id: String,
        student_id: String,
        course_id: String,
        timestamp: DateTime<Utc>,
    },

    /// The eligibility gate refused an add or drop
    EnrollmentRejected {
        student_id: String,
        course_id: String,
        reason: EnrollmentRejection,
        timestamp: DateTime<Utc>,
    },

    /// Grades were recorded on an enrollment
    GradesRecorded {
        enrollment_id: String,
        recorded_by: String,
        timestamp: DateTime<Utc>,
    },
}

impl ApplicationEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ApplicationEvent::UserRegistered { .. } => "UserRegistered",
            ApplicationEvent::UserDeleted { .. } => "UserDeleted",
            ApplicationEvent::SemesterCreated { .. } => "SemesterCreated",
            ApplicationEvent::SemesterDeleted { .. } => "SemesterDeleted",
            ApplicationEvent::CourseCreated { .. } => "CourseCreated",
            ApplicationEvent::CourseDeleted { .. } => "CourseDeleted",
            ApplicationEvent::EnrollmentCreated { .. } => "EnrollmentCreated",
            ApplicationEvent::EnrollmentDropped { .. } => "EnrollmentDropped",
            ApplicationEvent::EnrollmentRejected { .. } => "EnrollmentRejected",
            ApplicationEvent::GradesRecorded { .. } => "GradesRecorded",
        }
    }

    /// Get the event timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ApplicationEvent::UserRegistered { timestamp, .. }
            | ApplicationEvent::UserDeleted { timestamp, .. }
            | ApplicationEvent::SemesterCreated { timestamp, .. }
            | ApplicationEvent::SemesterDeleted { timestamp, .. }
            | ApplicationEvent::CourseCreated { timestamp, .. }
            | ApplicationEvent::CourseDeleted { timestamp, .. }
            | ApplicationEvent::EnrollmentCreated { timestamp, .. }
            | ApplicationEvent::EnrollmentDropped { timestamp, .. }
            | ApplicationEvent::EnrollmentRejected { timestamp, .. }
            | ApplicationEvent::GradesRecorded { timestamp, .. } => *timestamp,
        }
    }
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an application event
    async fn publish(&self, event: ApplicationEvent);
}

/// No-op event publisher for testing
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: ApplicationEvent) {}
}

/// Publisher that writes every event to the `tracing` log
#[derive(Debug, Default)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: ApplicationEvent) {
        match &event {
            ApplicationEvent::EnrollmentRejected {
                student_id,
                course_id,
                reason,
                ..
            } => tracing::info!(
                event = event.event_type(),
                student = %student_id,
                course = %course_id,
                reason = reason.code(),
                "enrollment change refused"
            ),
            _ => match serde_json::to_string(&event) {
                Ok(payload) => {
                    tracing::info!(event = event.event_type(), payload = %payload, "application event")
                }
                Err(e) => tracing::warn!(
                    event = event.event_type(),
                    error = %e,
                    "failed to serialize application event"
                ),
            },
        }
    }
}

/// In-memory event collector for testing
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: std::sync::Mutex<Vec<ApplicationEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected events
    pub fn events(&self) -> Vec<ApplicationEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Clear collected events
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: ApplicationEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type() {
        let event = ApplicationEvent::CourseCreated {
            course_id: "c".into(),
            semester_id: "s".into(),
            credits: 3,
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type(), "CourseCreated");
    }

    #[tokio::test]
    async fn test_in_memory_publisher() {
        let publisher = InMemoryEventPublisher::new();

        publisher
            .publish(ApplicationEvent::EnrollmentRejected {
                student_id: "s".into(),
                course_id: "c".into(),
                reason: EnrollmentRejection::RegistrationClosed,
                timestamp: Utc::now(),
            })
            .await;

        let events = publisher.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "EnrollmentRejected");

        publisher.clear();
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn test_tracing_publisher_does_not_panic_without_subscriber() {
        TracingEventPublisher
            .publish(ApplicationEvent::UserDeleted {
                user_id: "u".into(),
                timestamp: Utc::now(),
            })
            .await;
    }
}
