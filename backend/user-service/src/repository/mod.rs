//! User storage behind a trait seam so the backing store can be swapped
//! without touching the gRPC layer.

mod memory;

pub use memory::InMemoryUserRepository;

use async_trait::async_trait;

use crate::error::RegistryResult;

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub last_name: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> Vec<UserRecord>;

    /// Insert a new user and return its assigned id. Fails when the email
    /// is already taken.
    async fn insert(&self, email: &str, name: &str, last_name: &str) -> RegistryResult<i32>;

    /// Replace an existing user's fields. Fails when the id is unknown or
    /// the new email belongs to another user.
    async fn update(&self, record: UserRecord) -> RegistryResult<()>;

    /// Remove a user by id.
    async fn remove(&self, id: i32) -> RegistryResult<()>;

    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;
}
