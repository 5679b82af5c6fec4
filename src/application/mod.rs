//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::Storage`] trait and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login and session resolution
//! - [`services::password`] - Argon2id credential hashing

pub mod services;
