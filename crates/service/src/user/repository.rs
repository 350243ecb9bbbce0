use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use models::User;
use tokio::sync::RwLock;

/// Keyed storage for user records.
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Vec<User>;
    async fn get(&self, id: &str) -> Option<User>;
    /// Insert or overwrite the record keyed by `user.id`.
    async fn put(&self, user: User) -> User;
    /// Returns whether an entry existed.
    async fn remove(&self, id: &str) -> bool;
}

/// Process-lifetime store guarded by an async read-write lock.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    async fn get(&self, id: &str) -> Option<User> {
        let map = self.inner.read().await;
        map.get(id).cloned()
    }

    async fn put(&self, user: User) -> User {
        let mut map = self.inner.write().await;
        map.insert(user.id.clone(), user.clone());
        user
    }

    async fn remove(&self, id: &str) -> bool {
        let mut map = self.inner.write().await;
        map.remove(id).is_some()
    }
}
