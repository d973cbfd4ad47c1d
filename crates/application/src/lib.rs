use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use config::{Config, EXPORT_FILE_NAME};
use domain::csv_codec;
use domain::{
    DecodeMode, DomainError, KeyValueStore, RegistrationRequest, RegistrationService, UserRecord,
    UserRepository,
};
use infrastructure::{FileKeyValueStore, KvUserRepository};
use tracing::{info, warn};

/// Registration Application - orchestrates the complete flow.
///
/// Wires the file-backed store into the repository and the registration
/// service, then exposes the end-to-end operations the shell calls:
/// register, import, export, list, clear.
pub struct RegistrationApp {
    service: RegistrationService,
    export_dir: PathBuf,
    decode_mode: DecodeMode,
    submit_delay: Duration,
}

impl RegistrationApp {
    /// Build the storage stack and load the persisted record set.
    pub async fn new(config: &Config) -> Result<Self, DomainError> {
        // Infrastructure layer - storage setup
        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.data_dir)?);
        let repository: Arc<dyn UserRepository> =
            Arc::new(KvUserRepository::new(store, config.storage_key.clone()));

        let service = RegistrationService::load(repository).await?;
        info!("Loaded {} registered users", service.records().len());

        let decode_mode = if config.strict_decode {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        };

        Ok(Self {
            service,
            export_dir: PathBuf::from(&config.export_dir),
            decode_mode,
            submit_delay: Duration::from_millis(config.submit_delay_ms),
        })
    }

    /// Complete registration flow: validate, append, persist, and
    /// refresh the export file so it always mirrors the full set.
    pub async fn register(
        &mut self,
        request: RegistrationRequest,
    ) -> Result<UserRecord, DomainError> {
        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let record = self.service.register(request).await?;
        let path = self.export_to_file()?;
        info!(
            "Registered '{}'; {} users now in {}",
            record.username,
            self.service.records().len(),
            path.display()
        );
        Ok(record)
    }

    /// Decode CSV text and make it the new record set.
    pub async fn import_csv(&mut self, text: &str) -> Result<usize, DomainError> {
        let summary = csv_codec::decode(text, self.decode_mode)?;
        if summary.dropped_lines > 0 {
            warn!("Dropped {} malformed CSV lines on import", summary.dropped_lines);
        }
        self.service.import(summary.records).await
    }

    /// The full record set as CSV text.
    pub fn export_csv(&self) -> String {
        csv_codec::encode(self.service.records())
    }

    /// Write the CSV export to `users_database.csv` in the export
    /// directory, overwriting any previous export.
    pub fn export_to_file(&self) -> Result<PathBuf, DomainError> {
        let path = self.export_dir.join(EXPORT_FILE_NAME);
        std::fs::write(&path, self.export_csv()).map_err(|error| {
            DomainError::StorageError(format!(
                "failed to write export file {}: {}",
                path.display(),
                error
            ))
        })?;
        Ok(path)
    }

    /// Drop every registration, in memory and in the store.
    pub async fn clear(&mut self) -> Result<(), DomainError> {
        self.service.clear().await
    }

    pub fn users(&self) -> &[UserRecord] {
        self.service.records()
    }
}
