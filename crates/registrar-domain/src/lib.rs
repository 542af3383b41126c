//! Registrar Domain Layer
//!
//! Entities, value objects, repository interfaces and the enrollment
//! eligibility rules for the course-registration backend.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                           │
//! ├───────────────────────────────────────────────────────────────┤
//! │  entities       User, Semester, Course, Enrollment             │
//! │  value_objects  ids, Role, TimeWindow                           │
//! │  eligibility    create/destroy gates, window predicates         │
//! │  repositories   persistence interfaces (async traits)           │
//! │  ports          Clock, EnrollmentGuard                          │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The domain layer defines interfaces only; infrastructure crates provide
//! the implementations.

pub mod eligibility;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use eligibility::{
    registration_open, validate_enrollment_create, validate_enrollment_destroy,
    within_add_drop_window, within_registration_window, CourseOffering, EligibilityService,
    EnrollmentRejection, MAX_SEMESTER_CREDITS,
};
pub use entities::{Course, EnrolledCourse, Enrollment, Semester, User};
pub use errors::{DomainError, DomainResult};
pub use ports::{Clock, EnrollmentGuard, EnrollmentPermit, FixedClock, SystemClock};
pub use value_objects::{CourseId, EnrollmentId, Role, SemesterId, TimeWindow, UserId};
