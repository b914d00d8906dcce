//! Repository layer for persistence operations.
//!
//! The service depends on the `UserRepository` trait only, keeping the
//! persistence engine swappable and the service testable with doubles.

pub mod in_memory;
pub mod user_repository;

pub use in_memory::InMemoryUserRepository;
pub use user_repository::UserRepository;
