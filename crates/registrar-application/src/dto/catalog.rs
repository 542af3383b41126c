//! Semester and course DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use registrar_domain::{Course, Semester};

/// Command to create or replace a semester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterCommand {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_registration_start: DateTime<Utc>,
    pub course_registration_end: DateTime<Utc>,
    pub add_and_drop_start: DateTime<Utc>,
    pub add_and_drop_end: DateTime<Utc>,
}

/// Semester DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemesterDto {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_registration_start: DateTime<Utc>,
    pub course_registration_end: DateTime<Utc>,
    pub add_and_drop_start: DateTime<Utc>,
    pub add_and_drop_end: DateTime<Utc>,
}

impl SemesterDto {
    /// Create from domain entity
    pub fn from_domain(semester: &Semester) -> Self {
        Self {
            id: semester.id().to_string(),
            name: semester.name().to_string(),
            start_date: semester.start_date(),
            end_date: semester.end_date(),
            course_registration_start: semester.course_registration().start(),
            course_registration_end: semester.course_registration().end(),
            add_and_drop_start: semester.add_and_drop().start(),
            add_and_drop_end: semester.add_and_drop().end(),
        }
    }
}

/// Snapshot of a semester's windows at one instant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationStatusDto {
    pub semester_id: String,
    pub checked_at: DateTime<Utc>,
    pub within_registration_window: bool,
    pub within_add_drop_window: bool,
    pub open: bool,
}

/// Command to create or replace a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCommand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub credits: u32,
    pub semester_id: String,
    pub teacher_id: Option<String>,
}

/// Course DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub credits: u32,
    pub semester_id: String,
    pub teacher_id: Option<String>,
}

impl CourseDto {
    /// Create from domain entity
    pub fn from_domain(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            name: course.name().to_string(),
            description: course.description().to_string(),
            credits: course.credits(),
            semester_id: course.semester_id().to_string(),
            teacher_id: course.teacher_id().map(|id| id.to_string()),
        }
    }
}
