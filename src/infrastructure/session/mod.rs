//! Session storage for cookie-based authentication.
//!
//! Every storage backend owns one [`SessionStore`] and hands it out through
//! [`crate::domain::repositories::Storage::session_store`]. Sessions live in
//! process memory only; a background sweeper evicts expired entries.

mod memory_store;

pub use memory_store::{SessionRecord, SessionStore};
