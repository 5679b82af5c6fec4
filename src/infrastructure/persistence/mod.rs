//! Storage backend implementations.
//!
//! # Backends
//!
//! - [`MySqlStorage`] - durable storage over a MySQL connection pool, using
//!   runtime-checked SQLx queries with bound parameters
//! - [`MemoryStorage`] - process-local maps seeded from [`fixtures`]
//!
//! Both implement [`crate::domain::repositories::Storage`] with the same
//! observable behaviour.

pub mod fixtures;
pub mod memory_storage;
pub mod mysql_storage;

pub use fixtures::{Catalog, sample_catalog};
pub use memory_storage::MemoryStorage;
pub use mysql_storage::MySqlStorage;
