//! In-Memory Semester Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;

use registrar_domain::{
    errors::DomainResult, repositories::SemesterRepository, Semester, SemesterId,
};

use super::store::InMemoryStore;

/// In-memory implementation of SemesterRepository
#[derive(Debug, Clone)]
pub struct InMemorySemesterRepository {
    store: Arc<InMemoryStore>,
}

impl InMemorySemesterRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SemesterRepository for InMemorySemesterRepository {
    async fn save(&self, semester: &Semester) -> DomainResult<()> {
        self.store
            .write()
            .semesters
            .insert(semester.id(), semester.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SemesterId) -> DomainResult<Option<Semester>> {
        Ok(self.store.read().semesters.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Semester>> {
        Ok(self.store.read().semesters.values().cloned().collect())
    }

    async fn delete(&self, id: &SemesterId) -> DomainResult<()> {
        self.store.write().remove_semester(id);
        tracing::debug!(semester = %id, "semester removed");
        Ok(())
    }
}
