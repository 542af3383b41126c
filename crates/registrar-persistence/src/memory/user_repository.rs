//! In-Memory User Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;

use registrar_domain::{errors::DomainResult, repositories::UserRepository, User, UserId};

use super::store::InMemoryStore;

/// In-memory implementation of UserRepository
///
/// Usernames are unique; saving a second user under a taken username fails
/// with `EntityAlreadyExists`.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> DomainResult<()> {
        self.store.write().insert_user(user)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        Ok(self.store.read().users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let tables = self.store.read();
        Ok(tables
            .users
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.store.read().users.values().cloned().collect())
    }

    async fn delete(&self, id: &UserId) -> DomainResult<()> {
        self.store.write().remove_user(id);
        tracing::debug!(user = %id, "user removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_domain::Role;

    fn user(name: &str) -> User {
        User::new(name.to_string(), None, Role::Student, "hash".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryUserRepository::new(Arc::new(InMemoryStore::new()));
        let ada = user("ada");
        repo.save(&ada).await.unwrap();

        assert_eq!(repo.find_by_id(&ada.id()).await.unwrap(), Some(ada.clone()));
        assert_eq!(repo.find_by_username("ada").await.unwrap(), Some(ada));
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_username_is_unique() {
        let repo = InMemoryUserRepository::new(Arc::new(InMemoryStore::new()));
        repo.save(&user("ada")).await.unwrap();

        let result = repo.save(&user("ada")).await;
        assert!(matches!(
            result,
            Err(registrar_domain::DomainError::EntityAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_resave_same_user_is_update() {
        let repo = InMemoryUserRepository::new(Arc::new(InMemoryStore::new()));
        let mut ada = user("ada");
        repo.save(&ada).await.unwrap();

        ada.set_role(Role::Teacher);
        repo.save(&ada).await.unwrap();

        let found = repo.find_by_id(&ada.id()).await.unwrap().unwrap();
        assert_eq!(found.role(), Role::Teacher);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
