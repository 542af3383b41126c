//! Enrollment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use registrar_domain::{EnrolledCourse, Enrollment};

/// Command to enroll the calling student in a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEnrollmentCommand {
    pub course_id: String,
}

/// Command to record grades; absent grades stay as they are
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordGradesCommand {
    pub midterm_grade: Option<f64>,
    pub final_grade: Option<f64>,
}

/// Enrollment DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrollmentDto {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub midterm_grade: Option<f64>,
    pub final_grade: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl EnrollmentDto {
    /// Create from domain entity
    pub fn from_domain(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.id().to_string(),
            student_id: enrollment.student_id().to_string(),
            course_id: enrollment.course_id().to_string(),
            midterm_grade: enrollment.midterm_grade(),
            final_grade: enrollment.final_grade(),
            created_at: enrollment.created_at(),
        }
    }
}

/// Enrollment with the course details a student sees on their schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntryDto {
    pub enrollment: EnrollmentDto,
    pub course_name: String,
    pub credits: u32,
    pub semester_id: String,
}

impl ScheduleEntryDto {
    pub fn from_domain(entry: &EnrolledCourse) -> Self {
        Self {
            enrollment: EnrollmentDto::from_domain(&entry.enrollment),
            course_name: entry.course.name().to_string(),
            credits: entry.course.credits(),
            semester_id: entry.course.semester_id().to_string(),
        }
    }
}
