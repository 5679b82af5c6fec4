//! Errors surfaced by storage backends.

use thiserror::Error;

/// Failure of a storage operation.
///
/// Lookups that find nothing are not errors: they return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write.
    #[error("{entity} already exists: {detail}")]
    Conflict { entity: &'static str, detail: String },

    /// Any failure reported by the database driver or connection pool.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A structured column value could not be encoded or decoded.
    #[error("json column error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The insert succeeded but the follow-up read did not return the row.
    #[error("row {id} vanished from {table} right after insert")]
    MissingRow { table: &'static str, id: i64 },
}

impl StorageError {
    pub fn conflict(entity: &'static str, detail: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            detail: detail.into(),
        }
    }

    /// Returns true for uniqueness violations.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
