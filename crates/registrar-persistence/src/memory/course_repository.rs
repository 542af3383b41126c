//! In-Memory Course Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;

use registrar_domain::{
    errors::DomainResult, repositories::CourseRepository, Course, CourseId, SemesterId, UserId,
};

use super::store::InMemoryStore;

/// In-memory implementation of CourseRepository
///
/// Saving a course whose semester (or teacher) is unknown fails with
/// `EntityNotFound`.
#[derive(Debug, Clone)]
pub struct InMemoryCourseRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCourseRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    fn select(&self, keep: impl Fn(&Course) -> bool) -> Vec<Course> {
        self.store
            .read()
            .courses
            .values()
            .filter(|c| keep(c))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn save(&self, course: &Course) -> DomainResult<()> {
        self.store.write().insert_course(course)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &CourseId) -> DomainResult<Option<Course>> {
        Ok(self.store.read().courses.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Course>> {
        Ok(self.select(|_| true))
    }

    async fn find_by_semester(&self, semester_id: &SemesterId) -> DomainResult<Vec<Course>> {
        Ok(self.select(|c| c.semester_id() == *semester_id))
    }

    async fn find_by_teacher(&self, teacher_id: &UserId) -> DomainResult<Vec<Course>> {
        Ok(self.select(|c| c.is_taught_by(*teacher_id)))
    }

    async fn delete(&self, id: &CourseId) -> DomainResult<()> {
        self.store.write().remove_course(id);
        tracing::debug!(course = %id, "course removed");
        Ok(())
    }
}
