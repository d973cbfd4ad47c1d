use async_trait::async_trait;

use crate::entities::UserRecord;
use crate::errors::DomainError;

/// Repository trait - defines what we need from persistence layer.
/// The record set is always loaded and saved whole: it is the source of
/// truth for duplicate checks and re-export, and there is no per-record
/// update or delete operation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Load the persisted record set. An absent blob is an empty set.
    async fn load_all(&self) -> Result<Vec<UserRecord>, DomainError>;

    /// Persist the record set, replacing whatever was stored before.
    async fn save_all(&self, records: &[UserRecord]) -> Result<(), DomainError>;

    /// Drop the persisted record set entirely.
    async fn clear_all(&self) -> Result<(), DomainError>;
}
