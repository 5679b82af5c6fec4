//! Business logic services for the application layer.

pub mod auth_service;
pub mod password;

pub use auth_service::{AuthService, SignedIn};
