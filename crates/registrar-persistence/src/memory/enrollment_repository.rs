//! In-Memory Enrollment Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;

use registrar_domain::{
    errors::DomainResult, repositories::EnrollmentRepository, CourseId, EnrolledCourse,
    Enrollment, EnrollmentId, SemesterId, UserId,
};

use super::store::InMemoryStore;

/// In-memory implementation of EnrollmentRepository
///
/// Student and course must exist when an enrollment is saved.
#[derive(Debug, Clone)]
pub struct InMemoryEnrollmentRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryEnrollmentRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn save(&self, enrollment: &Enrollment) -> DomainResult<()> {
        self.store.write().insert_enrollment(enrollment)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &EnrollmentId) -> DomainResult<Option<Enrollment>> {
        Ok(self.store.read().enrollments.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Enrollment>> {
        Ok(self.store.read().enrollments.values().cloned().collect())
    }

    async fn find_by_student(&self, student_id: &UserId) -> DomainResult<Vec<EnrolledCourse>> {
        Ok(self
            .store
            .read()
            .enrolled_courses(|e, _| e.student_id() == *student_id))
    }

    async fn find_by_student_in_semester(
        &self,
        student_id: &UserId,
        semester_id: &SemesterId,
    ) -> DomainResult<Vec<EnrolledCourse>> {
        Ok(self.store.read().enrolled_courses(|e, course| {
            e.student_id() == *student_id && course.semester_id() == *semester_id
        }))
    }

    async fn find_by_courses(&self, course_ids: &[CourseId]) -> DomainResult<Vec<Enrollment>> {
        Ok(self
            .store
            .read()
            .enrollments
            .values()
            .filter(|e| course_ids.contains(&e.course_id()))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &EnrollmentId) -> DomainResult<()> {
        self.store.write().enrollments.remove(id);
        Ok(())
    }
}
