pub mod kv_store;
pub mod user_repository;

pub use kv_store::KeyValueStore;
pub use user_repository::UserRepository;
