use std::sync::Arc;

use crate::entities::{RegistrationRequest, UserRecord};
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::validation::validate;

/// Registration Service - Contains business logic.
///
/// Owns the in-memory record set as the single writer: it is loaded
/// whole at startup and persisted whole after every successful append,
/// so the persisted copy never gets ahead of or behind this one.
pub struct RegistrationService {
    repository: Arc<dyn UserRepository>,
    records: Vec<UserRecord>,
}

impl RegistrationService {
    /// Load the persisted record set and take ownership of it.
    pub async fn load(repository: Arc<dyn UserRepository>) -> Result<Self, DomainError> {
        let records = repository.load_all().await?;
        Ok(Self {
            repository,
            records,
        })
    }

    /// Register a new user with business validation.
    ///
    /// Validation runs against the current record set (duplicate emails
    /// are matched case-insensitively). On success the candidate gets
    /// today's registration date, is appended, and the whole set is
    /// persisted before the stored record is returned.
    pub async fn register(
        &mut self,
        request: RegistrationRequest,
    ) -> Result<UserRecord, DomainError> {
        let errors = validate(&request, &self.records);
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let record = UserRecord::from_request(request);
        self.records.push(record.clone());
        if let Err(error) = self.repository.save_all(&self.records).await {
            // Keep memory and disk in step: a failed save undoes the append.
            self.records.pop();
            return Err(error);
        }

        Ok(record)
    }

    /// Replace the record set wholesale (CSV import semantics: the
    /// imported file becomes the database) and persist it.
    pub async fn import(&mut self, records: Vec<UserRecord>) -> Result<usize, DomainError> {
        let previous = std::mem::replace(&mut self.records, records);
        if let Err(error) = self.repository.save_all(&self.records).await {
            self.records = previous;
            return Err(error);
        }
        Ok(self.records.len())
    }

    /// Drop every record, in memory and in the store.
    pub async fn clear(&mut self) -> Result<(), DomainError> {
        self.repository.clear_all().await?;
        self.records.clear();
        Ok(())
    }

    /// Read view of the current record set, in registration order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }
}
