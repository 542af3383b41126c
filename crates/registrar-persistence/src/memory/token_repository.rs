//! In-Memory Token Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use registrar_domain::{errors::DomainResult, repositories::TokenRepository, UserId};

use crate::error::PersistenceError;

use super::store::InMemoryStore;

/// In-memory implementation of TokenRepository
///
/// One opaque 32-hex-character key per user, issued on first request.
#[derive(Debug, Clone)]
pub struct InMemoryTokenRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryTokenRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn get_or_create(&self, user_id: &UserId) -> DomainResult<String> {
        let mut tables = self.store.write();
        if !tables.users.contains_key(user_id) {
            return Err(PersistenceError::not_found("User", user_id).into());
        }
        if let Some(existing) = tables
            .tokens
            .iter()
            .find_map(|(token, owner)| (owner == user_id).then(|| token.clone()))
        {
            return Ok(existing);
        }

        let token = Uuid::new_v4().simple().to_string();
        tables.tokens.insert(token.clone(), *user_id);
        Ok(token)
    }

    async fn find_user_id(&self, token: &str) -> DomainResult<Option<UserId>> {
        Ok(self.store.read().tokens.get(token).copied())
    }

    async fn revoke(&self, user_id: &UserId) -> DomainResult<()> {
        self.store
            .write()
            .tokens
            .retain(|_, owner| *owner != *user_id);
        Ok(())
    }
}
