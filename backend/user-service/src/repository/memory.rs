use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{RegistryError, RegistryResult};

use super::{UserRecord, UserRepository};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<i32, UserRecord>,
    next_id: i32,
}

/// In-memory user store. Ids are assigned sequentially starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<UserRecord> {
        let inner = self.inner.read().await;
        let mut users: Vec<UserRecord> = inner.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    async fn insert(&self, email: &str, name: &str, last_name: &str) -> RegistryResult<i32> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == email) {
            return Err(RegistryError::AlreadyExists(email.to_owned()));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner.users.insert(
            id,
            UserRecord {
                id,
                email: email.to_owned(),
                name: name.to_owned(),
                last_name: last_name.to_owned(),
            },
        );
        Ok(id)
    }

    async fn update(&self, record: UserRecord) -> RegistryResult<()> {
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&record.id) {
            return Err(RegistryError::NotFound(record.id));
        }
        let email_taken = inner
            .users
            .values()
            .any(|u| u.id != record.id && u.email == record.email);
        if email_taken {
            return Err(RegistryError::AlreadyExists(record.email));
        }

        inner.users.insert(record.id, record);
        Ok(())
    }

    async fn remove(&self, id: i32) -> RegistryResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(RegistryError::NotFound(id))
    }

    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let inner = self.inner.read().await;
        inner.users.values().find(|u| u.email == email).cloned()
    }
}
