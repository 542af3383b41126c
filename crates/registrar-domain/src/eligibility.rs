//! Enrollment eligibility rules
//!
//! Stateless gates deciding whether a student may add or drop a course.
//! Create checks run in a fixed order and the first failure wins:
//!
//! 1. the actor must be a student
//! 2. the semester's registration or add/drop window must be open
//! 3. same-semester credits plus the candidate course must not exceed
//!    [`MAX_SEMESTER_CREDITS`]
//!
//! Drop only checks the window. Neither gate persists anything; the caller
//! must serialize "load enrollments, validate, save" per student and semester
//! for the credit cap to hold under concurrent requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Course, EnrolledCourse, Semester, User};
use crate::errors::{DomainError, DomainResult};
use crate::ports::Clock;

/// Highest credit load a student may carry within one semester
pub const MAX_SEMESTER_CREDITS: u32 = 20;

/// Reason an enrollment change was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum EnrollmentRejection {
    #[error("Only students can enroll in courses.")]
    NotAStudent,

    #[error("Course registration is not currently open.")]
    RegistrationClosed,

    #[error(
        "Students can only enroll in up to {} credits per semester.",
        MAX_SEMESTER_CREDITS
    )]
    CreditLimitExceeded {
        /// Credits already held in the semester
        enrolled: u32,
        /// Credits of the course being added
        requested: u32,
    },
}

impl EnrollmentRejection {
    /// Stable machine-readable tag
    pub fn code(&self) -> &'static str {
        match self {
            EnrollmentRejection::NotAStudent => "not_a_student",
            EnrollmentRejection::RegistrationClosed => "registration_closed",
            EnrollmentRejection::CreditLimitExceeded { .. } => "credit_limit_exceeded",
        }
    }
}

/// A course paired with the semester it belongs to
#[derive(Debug, Clone, Copy)]
pub struct CourseOffering<'a> {
    course: &'a Course,
    semester: &'a Semester,
}

impl<'a> CourseOffering<'a> {
    /// Pair a course with its semester, refusing mismatched pairs
    pub fn new(course: &'a Course, semester: &'a Semester) -> DomainResult<Self> {
        if course.semester_id() != semester.id() {
            return Err(DomainError::BusinessRuleViolation {
                rule: format!(
                    "course {} belongs to semester {}, not {}",
                    course.id(),
                    course.semester_id(),
                    semester.id()
                ),
            });
        }
        Ok(Self { course, semester })
    }

    pub fn course(&self) -> &'a Course {
        self.course
    }

    pub fn semester(&self) -> &'a Semester {
        self.semester
    }
}

/// `true` iff `now` lies inside the course registration window
pub fn within_registration_window(semester: &Semester, now: DateTime<Utc>) -> bool {
    semester.course_registration().contains(now)
}

/// `true` iff `now` lies inside the add/drop window
pub fn within_add_drop_window(semester: &Semester, now: DateTime<Utc>) -> bool {
    semester.add_and_drop().contains(now)
}

/// `true` iff either window is open at `now`
pub fn registration_open(semester: &Semester, now: DateTime<Utc>) -> bool {
    within_registration_window(semester, now) || within_add_drop_window(semester, now)
}

/// Gate for adding `offering` to `student`'s schedule
///
/// `existing_same_semester` must hold only the student's enrollments in the
/// offering's semester.
pub fn validate_enrollment_create(
    student: &User,
    offering: CourseOffering<'_>,
    existing_same_semester: &[EnrolledCourse],
    now: DateTime<Utc>,
) -> Result<(), EnrollmentRejection> {
    if !student.role().is_student() {
        return Err(EnrollmentRejection::NotAStudent);
    }

    ensure_window_open(offering.semester(), now)?;

    let enrolled = existing_same_semester
        .iter()
        .map(EnrolledCourse::credits)
        .fold(0u32, u32::saturating_add);
    let requested = offering.course().credits();

    if enrolled.saturating_add(requested) > MAX_SEMESTER_CREDITS {
        return Err(EnrollmentRejection::CreditLimitExceeded {
            enrolled,
            requested,
        });
    }

    Ok(())
}

/// Gate for dropping an enrollment in `offering`
pub fn validate_enrollment_destroy(
    offering: CourseOffering<'_>,
    now: DateTime<Utc>,
) -> Result<(), EnrollmentRejection> {
    ensure_window_open(offering.semester(), now)
}

fn ensure_window_open(semester: &Semester, now: DateTime<Utc>) -> Result<(), EnrollmentRejection> {
    if registration_open(semester, now) {
        Ok(())
    } else {
        Err(EnrollmentRejection::RegistrationClosed)
    }
}

/// Eligibility gates bound to a clock
///
/// Each call samples the clock exactly once.
#[derive(Debug, Clone)]
pub struct EligibilityService<C: Clock> {
    clock: C,
}

impl<C: Clock> EligibilityService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn validate_create(
        &self,
        student: &User,
        offering: CourseOffering<'_>,
        existing_same_semester: &[EnrolledCourse],
    ) -> Result<(), EnrollmentRejection> {
        let now = self.clock.now();
        validate_enrollment_create(student, offering, existing_same_semester, now)
    }

    pub fn validate_destroy(&self, offering: CourseOffering<'_>) -> Result<(), EnrollmentRejection> {
        let now = self.clock.now();
        validate_enrollment_destroy(offering, now)
    }

    pub fn registration_open(&self, semester: &Semester) -> bool {
        registration_open(semester, self.clock.now())
    }

    pub fn within_registration_window(&self, semester: &Semester) -> bool {
        within_registration_window(semester, self.clock.now())
    }

    pub fn within_add_drop_window(&self, semester: &Semester) -> bool {
        within_add_drop_window(semester, self.clock.now())
    }
}
