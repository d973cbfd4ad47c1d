use async_trait::async_trait;

use crate::errors::DomainError;

/// Generic persistent key-value storage - get/set/clear by string key.
/// This is a PORT in hexagonal architecture; the core never sees what
/// backs it (a directory of files, an in-memory map, ...).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, DomainError>;
    async fn save(&self, key: &str, value: &str) -> Result<(), DomainError>;
    async fn clear(&self, key: &str) -> Result<(), DomainError>;
}
