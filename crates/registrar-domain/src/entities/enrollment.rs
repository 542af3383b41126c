//! Enrollment entity linking a student to a course

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Course;
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CourseId, EnrollmentId, UserId};

const MAX_GRADE: f64 = 100.0;

/// A student's seat in a course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    id: EnrollmentId,
    student_id: UserId,
    course_id: CourseId,
    midterm_grade: Option<f64>,
    final_grade: Option<f64>,
    created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create an ungraded enrollment
    ///
    /// Callers must have passed the eligibility gate first.
    pub fn new(student_id: UserId, course_id: CourseId) -> Self {
        Self {
            id: EnrollmentId::new(),
            student_id,
            course_id,
            midterm_grade: None,
            final_grade: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    pub fn student_id(&self) -> UserId {
        self.student_id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn midterm_grade(&self) -> Option<f64> {
        self.midterm_grade
    }

    pub fn final_grade(&self) -> Option<f64> {
        self.final_grade
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Record grades; `None` leaves the existing value untouched
    pub fn record_grades(&mut self, midterm: Option<f64>, final_: Option<f64>) -> DomainResult<()> {
        if let Some(grade) = midterm {
            Self::validate_grade("midterm_grade", grade)?;
        }
        if let Some(grade) = final_ {
            Self::validate_grade("final_grade", grade)?;
        }
        if midterm.is_some() {
            self.midterm_grade = midterm;
        }
        if final_.is_some() {
            self.final_grade = final_;
        }
        Ok(())
    }

    fn validate_grade(field: &str, grade: f64) -> DomainResult<()> {
        if !grade.is_finite() || !(0.0..=MAX_GRADE).contains(&grade) {
            return Err(DomainError::validation(
                field,
                format!("must be between 0 and {}", MAX_GRADE),
            ));
        }
        Ok(())
    }
}

/// An enrollment joined with the course it points at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrolledCourse {
    pub enrollment: Enrollment,
    pub course: Course,
}

impl EnrolledCourse {
    pub fn new(enrollment: Enrollment, course: Course) -> Self {
        Self { enrollment, course }
    }

    pub fn credits(&self) -> u32 {
        self.course.credits()
    }
}
