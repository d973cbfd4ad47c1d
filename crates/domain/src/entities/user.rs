use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current date in the `YYYY-MM-DD` shape the registration form uses.
pub fn today() -> String {
    Utc::now().date_naive().to_string()
}

/// Core UserRecord entity - one registration entry in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
    pub birthdate: String,
    pub address: String,
    pub phone: String,
    /// Assigned once at creation (or carried over on import) and never rewritten.
    pub registration_date: String,
}

impl UserRecord {
    pub fn new(
        username: String,
        email: String,
        password: String,
        birthdate: String,
        address: String,
        phone: String,
    ) -> Self {
        Self {
            username,
            email,
            password,
            birthdate,
            address,
            phone,
            registration_date: today(),
        }
    }

    pub fn with_registration_date(
        username: String,
        email: String,
        password: String,
        birthdate: String,
        address: String,
        phone: String,
        registration_date: String,
    ) -> Self {
        Self {
            username,
            email,
            password,
            birthdate,
            address,
            phone,
            registration_date,
        }
    }

    pub fn from_request(request: RegistrationRequest) -> Self {
        Self::new(
            request.username,
            request.email,
            request.password,
            request.birthdate,
            request.address,
            request.phone,
        )
    }
}

/// The form payload - the six user-supplied fields, before a
/// registration date has been assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub birthdate: String,
    pub address: String,
    pub phone: String,
}
