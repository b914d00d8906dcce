use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::models::User;
use crate::repositories::UserRepository;

/// Process-local user store backing the running server.
///
/// Insertion order is tracked separately so `get_all` returns a stable
/// listing; the map alone would iterate in arbitrary order.
pub struct InMemoryUserRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    users: HashMap<Uuid, User>,
    order: Vec<Uuid>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store::default()),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Store>, RepositoryError> {
        self.inner
            .read()
            .map_err(|_| RepositoryError::new("user store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Store>, RepositoryError> {
        self.inner
            .write()
            .map_err(|_| RepositoryError::new("user store lock poisoned"))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let store = self.read()?;
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.users.get(id).cloned())
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn create(&self, user: &User) -> Result<bool, RepositoryError> {
        let mut store = self.write()?;
        if store.users.contains_key(&user.id) {
            return Ok(false);
        }
        store.users.insert(user.id, user.clone());
        store.order.push(user.id);
        Ok(true)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut store = self.write()?;
        if store.users.remove(&id).is_none() {
            return Ok(false);
        }
        store.order.retain(|existing| *existing != id);
        Ok(true)
    }
}
