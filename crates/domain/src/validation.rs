use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::entities::{RegistrationRequest, UserRecord};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s()-]{10,}$").unwrap());

/// Field-scoped validation failures - a mapping from field name to a
/// human-readable message. Empty means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a registration candidate against the format rules and the
/// current record set (for duplicate email detection).
///
/// Pure and side-effect free: callers must re-run it against the current
/// set on every submission, since the set mutates between calls. All
/// failing fields are collected; per field, the first failing rule wins.
pub fn validate(candidate: &RegistrationRequest, existing: &[UserRecord]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if candidate.username.trim().is_empty() {
        errors.insert("username", "Username is required");
    } else if candidate.username.chars().count() < 3 {
        errors.insert("username", "Username must be at least 3 characters");
    }

    if candidate.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !EMAIL_PATTERN.is_match(&candidate.email) {
        errors.insert("email", "Email is invalid");
    } else if existing
        .iter()
        .any(|user| user.email.to_lowercase() == candidate.email.to_lowercase())
    {
        errors.insert("email", "Email already exists");
    }

    if candidate.password.trim().is_empty() {
        errors.insert("password", "Password is required");
    } else if candidate.password.chars().count() < 6 {
        errors.insert("password", "Password must be at least 6 characters");
    }

    if candidate.birthdate.is_empty() {
        errors.insert("birthdate", "Birth date is required");
    }

    if candidate.address.trim().is_empty() {
        errors.insert("address", "Address is required");
    }

    if candidate.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required");
    } else if !PHONE_PATTERN.is_match(&candidate.phone) {
        errors.insert("phone", "Phone number is invalid");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            username: "abc".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            birthdate: "2000-01-01".to_string(),
            address: "1 Main St".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    fn existing(email: &str) -> Vec<UserRecord> {
        vec![UserRecord::new(
            "someone".to_string(),
            email.to_string(),
            "hunter2-hunter2".to_string(),
            "1990-05-05".to_string(),
            "2 Side St".to_string(),
            "+1 (555) 123-4567".to_string(),
        )]
    }

    #[test]
    fn valid_candidate_produces_no_errors() {
        let errors = validate(&request(), &[]);
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn all_failing_fields_are_collected() {
        let candidate = RegistrationRequest {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            birthdate: String::new(),
            address: String::new(),
            phone: String::new(),
        };
        let errors = validate(&candidate, &[]);
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("birthdate"), Some("Birth date is required"));
        assert_eq!(errors.get("address"), Some("Address is required"));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
    }

    #[test]
    fn username_length_boundary() {
        let mut candidate = request();
        candidate.username = "abc".to_string();
        assert!(validate(&candidate, &[]).get("username").is_none());

        candidate.username = "ab".to_string();
        assert_eq!(
            validate(&candidate, &[]).get("username"),
            Some("Username must be at least 3 characters")
        );
    }

    #[test]
    fn password_length_boundary() {
        let mut candidate = request();
        candidate.password = "secret".to_string();
        assert!(validate(&candidate, &[]).get("password").is_none());

        candidate.password = "secre".to_string();
        assert_eq!(
            validate(&candidate, &[]).get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn email_shape_is_checked() {
        let mut candidate = request();
        candidate.email = "not-an-email".to_string();
        assert_eq!(validate(&candidate, &[]).get("email"), Some("Email is invalid"));
    }

    #[test]
    fn duplicate_email_is_case_insensitive() {
        let mut candidate = request();
        candidate.email = "a@b.com".to_string();
        let errors = validate(&candidate, &existing("A@B.com"));
        assert_eq!(errors.get("email"), Some("Email already exists"));
    }

    #[test]
    fn distinct_email_is_not_flagged_as_duplicate() {
        let mut candidate = request();
        candidate.email = "c@d.com".to_string();
        let errors = validate(&candidate, &existing("a@b.com"));
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn phone_shape_is_checked() {
        let mut candidate = request();
        candidate.phone = "+1 (555) 123-4567".to_string();
        assert!(validate(&candidate, &[]).get("phone").is_none());

        candidate.phone = "555-abc-1234".to_string();
        assert_eq!(
            validate(&candidate, &[]).get("phone"),
            Some("Phone number is invalid")
        );

        // Nine significant characters is one short of the minimum.
        candidate.phone = "123456789".to_string();
        assert_eq!(
            validate(&candidate, &[]).get("phone"),
            Some("Phone number is invalid")
        );
    }

    #[test]
    fn validate_is_idempotent() {
        let candidate = request();
        let set = existing("x@y.org");
        assert_eq!(validate(&candidate, &set), validate(&candidate, &set));
    }
}
