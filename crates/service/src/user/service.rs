use std::sync::Arc;

use models::{user::validate_id, User, UserInput};
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::user::repository::UserRepository;

/// Application service for the users resource.
/// Owns the id resolution rules so handlers only deal with HTTP concerns.
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Vec<User> { self.repo.list().await }

    pub async fn get(&self, id: &str) -> Result<User, ServiceError> {
        self.repo.get(id).await.ok_or_else(|| ServiceError::not_found("user"))
    }

    /// Store a full record. An empty body id falls back to the path id.
    #[instrument(skip(self, path_id, user), fields(path_id = %path_id))]
    pub async fn update(&self, path_id: &str, mut user: User) -> Result<User, ServiceError> {
        if user.id.trim().is_empty() { user.id = path_id.to_string(); }
        validate_id(&user.id)?;
        debug!(id = %user.id, "storing user");
        Ok(self.repo.put(user).await)
    }

    /// Seed a record with `path_id` (if any), merge the body onto it and store it.
    #[instrument(skip(self, input))]
    pub async fn create(&self, path_id: Option<&str>, input: UserInput) -> Result<User, ServiceError> {
        let user = User::with_id(path_id.unwrap_or_default()).merge(input);
        validate_id(&user.id)?;
        debug!(id = %user.id, "creating user");
        Ok(self.repo.put(user).await)
    }

    /// Idempotent; returns whether a record was removed.
    pub async fn delete(&self, id: &str) -> bool { self.repo.remove(id).await }
}
