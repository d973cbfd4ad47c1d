use std::env;

/// Every export overwrites the same file - no versioning.
pub const EXPORT_FILE_NAME: &str = "users_database.csv";

/// Well-known storage key the record set is persisted under. Matches
/// the localStorage key of the original form so exported blobs line up.
pub const DEFAULT_STORAGE_KEY: &str = "userRegistrations";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the key-value store keeps its files in.
    pub data_dir: String,
    /// Key the JSON-encoded record set lives under.
    pub storage_key: String,
    /// Directory `users_database.csv` is written to.
    pub export_dir: String,
    /// Fail CSV imports on malformed lines instead of dropping them.
    pub strict_decode: bool,
    /// Artificial submit latency in milliseconds (0 disables it).
    pub submit_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, with a `.env`
    /// file honored when present.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenv::dotenv().ok();

        Ok(Config {
            data_dir: env::var("REGISTRY_DATA_DIR").unwrap_or_else(|_| "data".to_string()),

            storage_key: env::var("REGISTRY_STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),

            export_dir: env::var("REGISTRY_EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),

            strict_decode: env::var("REGISTRY_STRICT_DECODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|e| format!("Invalid REGISTRY_STRICT_DECODE: {}", e))?,

            submit_delay_ms: env::var("REGISTRY_SUBMIT_DELAY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .map_err(|e| format!("Invalid REGISTRY_SUBMIT_DELAY_MS: {}", e))?,
        })
    }
}
