//! Shared in-memory tables
//!
//! All repositories view the same [`InMemoryStore`] so that deletes can
//! cascade across tables under a single write lock.

use std::collections::HashMap;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use registrar_domain::{
    Course, CourseId, EnrolledCourse, Enrollment, EnrollmentId, Semester, SemesterId, User,
    UserId,
};

use crate::error::PersistenceError;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) tokens: HashMap<String, UserId>,
    pub(crate) semesters: HashMap<SemesterId, Semester>,
    pub(crate) courses: HashMap<CourseId, Course>,
    pub(crate) enrollments: HashMap<EnrollmentId, Enrollment>,
}

impl Tables {
    /// Join enrollments with their courses, keeping those `keep` accepts
    pub(crate) fn enrolled_courses(
        &self,
        keep: impl Fn(&Enrollment, &Course) -> bool,
    ) -> Vec<EnrolledCourse> {
        self.enrollments
            .values()
            .filter_map(|enrollment| {
                let course = self.courses.get(&enrollment.course_id())?;
                keep(enrollment, course)
                    .then(|| EnrolledCourse::new(enrollment.clone(), course.clone()))
            })
            .collect()
    }

    pub(crate) fn insert_user(&mut self, user: &User) -> Result<(), PersistenceError> {
        let clash = self
            .users
            .values()
            .any(|other| other.id() != user.id() && other.username() == user.username());
        if clash {
            return Err(PersistenceError::duplicate("User", user.username()));
        }
        self.users.insert(user.id(), user.clone());
        Ok(())
    }

    pub(crate) fn insert_course(&mut self, course: &Course) -> Result<(), PersistenceError> {
        if !self.semesters.contains_key(&course.semester_id()) {
            return Err(PersistenceError::not_found("Semester", course.semester_id()));
        }
        if let Some(teacher) = course.teacher_id() {
            if !self.users.contains_key(&teacher) {
                return Err(PersistenceError::not_found("User", teacher));
            }
        }
        self.courses.insert(course.id(), course.clone());
        Ok(())
    }

    pub(crate) fn insert_enrollment(
        &mut self,
        enrollment: &Enrollment,
    ) -> Result<(), PersistenceError> {
        if !self.users.contains_key(&enrollment.student_id()) {
            return Err(PersistenceError::not_found("User", enrollment.student_id()));
        }
        if !self.courses.contains_key(&enrollment.course_id()) {
            return Err(PersistenceError::not_found("Course", enrollment.course_id()));
        }
        self.enrollments.insert(enrollment.id(), enrollment.clone());
        Ok(())
    }

    /// Remove a user with their enrollments and tokens; courses they taught
    /// lose their teacher
    pub(crate) fn remove_user(&mut self, id: &UserId) {
        if self.users.remove(id).is_none() {
            return;
        }
        self.tokens.retain(|_, owner| *owner != *id);
        self.enrollments.retain(|_, e| e.student_id() != *id);
        for course in self.courses.values_mut() {
            if course.is_taught_by(*id) {
                course.assign_teacher(None);
            }
        }
    }

    /// Remove a semester with its courses and their enrollments
    pub(crate) fn remove_semester(&mut self, id: &SemesterId) {
        if self.semesters.remove(id).is_none() {
            return;
        }
        let doomed: Vec<CourseId> = self
            .courses
            .values()
            .filter(|c| c.semester_id() == *id)
            .map(Course::id)
            .collect();
        for course_id in &doomed {
            self.remove_course(course_id);
        }
    }

    /// Remove a course with its enrollments
    pub(crate) fn remove_course(&mut self, id: &CourseId) {
        if self.courses.remove(id).is_some() {
            self.enrollments.retain(|_, e| e.course_id() != *id);
        }
    }
}

/// Thread-safe backing store shared by the in-memory repositories
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }

    /// Row counts per table (for diagnostics and tests)
    pub fn counts(&self) -> StoreCounts {
        let tables = self.tables.read();
        StoreCounts {
            users: tables.users.len(),
            semesters: tables.semesters.len(),
            courses: tables.courses.len(),
            enrollments: tables.enrollments.len(),
        }
    }
}

/// Number of rows held in each table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: usize,
    pub semesters: usize,
    pub courses: usize,
    pub enrollments: usize,
}
