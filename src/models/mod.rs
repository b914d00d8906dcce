//! Data models and request/response payloads.

pub mod user;

pub use user::*;
