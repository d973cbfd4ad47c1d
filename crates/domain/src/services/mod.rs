pub mod csv_codec;
pub mod registration_service;

pub use csv_codec::{DecodeMode, DecodeSummary, CSV_HEADERS};
pub use registration_service::RegistrationService;
