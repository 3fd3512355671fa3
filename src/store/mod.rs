use crate::models::registration::Registration;
use async_trait::async_trait;

mod memory;
mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlRegistrationStore;

/// The identity-store contract. The engine takes an implementation as an
/// explicit constructor parameter, so the decision logic never cares which
/// storage backs it.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn get(&self, account_id: i64) -> anyhow::Result<Option<Registration>>;

    /// Creates or overwrites the row for `registration.account_id`.
    async fn put(&self, registration: &Registration) -> anyhow::Result<()>;

    /// Removes the row. Returns whether one existed.
    async fn delete(&self, account_id: i64) -> anyhow::Result<bool>;

    /// Every stored registration, unordered. Admin listing only.
    async fn list_all(&self) -> anyhow::Result<Vec<Registration>>;
}
