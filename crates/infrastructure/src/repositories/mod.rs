pub mod kv_user_repository;

pub use kv_user_repository::KvUserRepository;
