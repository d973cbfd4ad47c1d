pub mod user;

pub use user::{today, RegistrationRequest, UserRecord};
