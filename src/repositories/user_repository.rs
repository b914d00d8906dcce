use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::models::User;

/// Persistence boundary for the User entity.
///
/// "Not found" and "rejected" are successful outcomes (`None` / `false`);
/// only genuine persistence failures surface as `RepositoryError`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user. An empty vector is a valid result.
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Fetch a single user, or `None` if no record matches.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Persist a fully-formed user. Returns `false` when the store rejects
    /// the record (e.g. duplicate id) without failing.
    async fn create(&self, user: &User) -> Result<bool, RepositoryError>;

    /// Remove a user. Returns `false` when no record matched the id.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
