//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete storage backends and session handling.
//!
//! # Modules
//!
//! - [`persistence`] - MySQL and in-memory [`crate::domain::repositories::Storage`] implementations
//! - [`session`] - In-memory session store used for cookie authentication

pub mod persistence;
pub mod session;
