//! Storage trait definitions for the domain layer.
//!
//! The whole persistence surface of the service is a single [`Storage`]
//! contract with two interchangeable implementations in
//! `crate::infrastructure::persistence`:
//!
//! - [`crate::infrastructure::persistence::MySqlStorage`] - durable, MySQL-backed
//! - [`crate::infrastructure::persistence::MemoryStorage`] - process-local, fixture-seeded
//!
//! Exactly one of them is chosen at startup (see [`crate::server::build_storage`])
//! and shared as `Arc<dyn Storage>` for the lifetime of the process.
//!
//! # Testing
//!
//! A `mockall` mock is generated for test builds. Integration tests live in
//! `tests/storage_*.rs`.

pub mod error;
pub mod storage;

pub use error::{StorageError, StorageResult};
pub use storage::Storage;

#[cfg(test)]
pub use storage::MockStorage;
