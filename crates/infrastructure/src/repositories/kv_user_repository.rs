use std::sync::Arc;

use async_trait::async_trait;
use domain::{DomainError, KeyValueStore, UserRecord, UserRepository};
use tracing::info;

/// UserRepository backed by a generic key-value store: the whole record
/// set is serialized as one JSON array under a single well-known key,
/// exactly like the original form kept it in browser local storage.
pub struct KvUserRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KvUserRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: String) -> Self {
        Self { store, key }
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn load_all(&self) -> Result<Vec<UserRecord>, DomainError> {
        match self.store.load(&self.key).await? {
            None => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(|error| {
                DomainError::SerializationError(format!(
                    "stored record set under key '{}' is not valid JSON: {}",
                    self.key, error
                ))
            }),
        }
    }

    async fn save_all(&self, records: &[UserRecord]) -> Result<(), DomainError> {
        let text = serde_json::to_string(records).map_err(|error| {
            DomainError::SerializationError(format!("failed to serialize record set: {}", error))
        })?;
        self.store.save(&self.key, &text).await?;
        info!("Persisted {} users under key '{}'", records.len(), self.key);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), DomainError> {
        self.store.clear(&self.key).await
    }
}
