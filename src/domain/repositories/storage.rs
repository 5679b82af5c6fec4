//! The persistence contract shared by every storage backend.

use std::sync::Arc;

use async_trait::async_trait;

use super::error::StorageResult;
use crate::domain::entities::{
    Article, NewOutfit, NewOutfitArticle, NewUser, Outfit, OutfitArticle, Save, User,
};
use crate::infrastructure::session::SessionStore;

/// Persistence interface for users, articles, saves, outfits and placements.
///
/// Every operation is a single independent call: nothing spans more than one
/// round trip to the backend and no operation is retried. Reads return owned
/// copies ordered by id, which is also creation order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MySqlStorage`] - MySQL implementation
/// - [`crate::infrastructure::persistence::MemoryStorage`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/storage_memory.rs`, `tests/storage_mysql.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Finds a user by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn get_user(&self, id: i64) -> StorageResult<Option<User>>;

    /// Finds a user by exact, case-sensitive username.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    /// Creates a user and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Conflict`] if the username is taken.
    async fn create_user(&self, new_user: NewUser) -> StorageResult<User>;

    /// Lists articles, restricted to `categories` when the slice is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn get_articles(&self, categories: &[String]) -> StorageResult<Vec<Article>>;

    /// Bookmarks an article for a user.
    ///
    /// The (user, article) pair is not required to be unique.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn create_save(&self, user_id: i64, article_id: i64) -> StorageResult<Save>;

    /// Removes the oldest save matching (user, article).
    ///
    /// Deleting a save that does not exist is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn delete_save(&self, user_id: i64, article_id: i64) -> StorageResult<()>;

    /// Lists every save belonging to a user.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn get_saves_by_user(&self, user_id: i64) -> StorageResult<Vec<Save>>;

    /// Lists every outfit.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn get_outfits(&self) -> StorageResult<Vec<Outfit>>;

    /// Creates an outfit, keeping the caller-supplied `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn create_outfit(&self, outfit: NewOutfit) -> StorageResult<Outfit>;

    /// Lists every article placement.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Database`] on backend failures.
    async fn get_outfit_articles(&self) -> StorageResult<Vec<OutfitArticle>>;

    /// Places an article in an outfit.
    ///
    /// # Errors
    ///
    /// Returns [`super::StorageError::Encoding`] if the position cannot be
    /// serialized, [`super::StorageError::Database`] on backend failures.
    async fn create_outfit_article(
        &self,
        outfit_article: NewOutfitArticle,
    ) -> StorageResult<OutfitArticle>;

    /// Session store consumed by the authentication middleware.
    fn session_store(&self) -> Arc<SessionStore>;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
