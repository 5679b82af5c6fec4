//! In-memory implementation of the storage contract.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::fixtures::{Catalog, sample_catalog};
use crate::domain::entities::{
    Article, NewOutfit, NewOutfitArticle, NewUser, Outfit, OutfitArticle, Save, User,
};
use crate::domain::repositories::{Storage, StorageError, StorageResult};
use crate::infrastructure::session::SessionStore;

/// Maps and id counter guarded by a single lock.
///
/// `BTreeMap` keyed by id keeps iteration in creation order because ids are
/// handed out by one monotonic counter.
struct MemoryState {
    users: BTreeMap<i64, User>,
    articles: BTreeMap<i64, Article>,
    saves: BTreeMap<i64, Save>,
    outfits: BTreeMap<i64, Outfit>,
    outfit_articles: BTreeMap<i64, OutfitArticle>,
    next_id: i64,
}

impl MemoryState {
    fn from_catalog(catalog: Catalog) -> Self {
        let next_id = catalog.max_id() + 1;

        Self {
            users: BTreeMap::new(),
            articles: catalog.articles.into_iter().map(|a| (a.id, a)).collect(),
            saves: BTreeMap::new(),
            outfits: catalog.outfits.into_iter().map(|o| (o.id, o)).collect(),
            outfit_articles: catalog
                .outfit_articles
                .into_iter()
                .map(|oa| (oa.id, oa))
                .collect(),
            next_id,
        }
    }

    /// Issues the next id. Shared by every entity kind.
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Process-local storage seeded with a fixture catalog.
///
/// Behaves like [`super::MySqlStorage`] for every operation, including the
/// unique-username rule, but loses all data when the process exits. Each
/// instance owns its own id counter, starting right above the highest
/// fixture id.
pub struct MemoryStorage {
    state: RwLock<MemoryState>,
    sessions: Arc<SessionStore>,
}

impl MemoryStorage {
    /// Creates a store seeded with [`sample_catalog`].
    pub fn new() -> Self {
        Self::with_catalog(sample_catalog())
    }

    /// Creates a store seeded with `catalog`. Users and saves start empty.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            state: RwLock::new(MemoryState::from_catalog(catalog)),
            sessions: Arc::new(SessionStore::default()),
        }
    }

    /// Replaces the session store handed out by [`Storage::session_store`].
    pub fn with_session_store(mut self, sessions: Arc<SessionStore>) -> Self {
        self.sessions = sessions;
        self
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: i64) -> StorageResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> StorageResult<User> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.username == new_user.username) {
            return Err(StorageError::conflict(
                "user",
                format!("username '{}' is taken", new_user.username),
            ));
        }

        let id = state.allocate_id();
        let user = new_user.into_user(id);
        state.users.insert(id, user.clone());

        debug!(user_id = id, "User created");
        Ok(user)
    }

    async fn get_articles(&self, categories: &[String]) -> StorageResult<Vec<Article>> {
        let state = self.state.read().await;
        Ok(state
            .articles
            .values()
            .filter(|a| a.matches_categories(categories))
            .cloned()
            .collect())
    }

    async fn create_save(&self, user_id: i64, article_id: i64) -> StorageResult<Save> {
        let mut state = self.state.write().await;
        let id = state.allocate_id();
        let save = Save {
            id,
            user_id,
            article_id,
        };
        state.saves.insert(id, save.clone());

        debug!(save_id = id, user_id, article_id, "Save created");
        Ok(save)
    }

    async fn delete_save(&self, user_id: i64, article_id: i64) -> StorageResult<()> {
        let mut state = self.state.write().await;

        let found = state
            .saves
            .values()
            .find(|s| s.is_for(user_id, article_id))
            .map(|s| s.id);

        if let Some(id) = found {
            state.saves.remove(&id);
            debug!(save_id = id, user_id, article_id, "Save deleted");
        }

        Ok(())
    }

    async fn get_saves_by_user(&self, user_id: i64) -> StorageResult<Vec<Save>> {
        let state = self.state.read().await;
        Ok(state
            .saves
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_outfits(&self) -> StorageResult<Vec<Outfit>> {
        Ok(self.state.read().await.outfits.values().cloned().collect())
    }

    async fn create_outfit(&self, outfit: NewOutfit) -> StorageResult<Outfit> {
        let mut state = self.state.write().await;
        let id = state.allocate_id();
        let outfit = outfit.into_outfit(id);
        state.outfits.insert(id, outfit.clone());

        debug!(outfit_id = id, "Outfit created");
        Ok(outfit)
    }

    async fn get_outfit_articles(&self) -> StorageResult<Vec<OutfitArticle>> {
        Ok(self
            .state
            .read()
            .await
            .outfit_articles
            .values()
            .cloned()
            .collect())
    }

    async fn create_outfit_article(
        &self,
        outfit_article: NewOutfitArticle,
    ) -> StorageResult<OutfitArticle> {
        let mut state = self.state.write().await;
        let id = state.allocate_id();
        let outfit_article = outfit_article.into_outfit_article(id);
        state.outfit_articles.insert(id, outfit_article.clone());

        debug!(outfit_article_id = id, "Outfit article created");
        Ok(outfit_article)
    }

    fn session_store(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counter_is_shared_across_entity_kinds() {
        let storage = MemoryStorage::new();

        let save = storage.create_save(1, 1).await.unwrap();
        let user = storage
            .create_user(NewUser {
                username: "ada".to_string(),
                password: "x".to_string(),
                preferences: None,
            })
            .await
            .unwrap();

        assert_eq!(save.id, 202);
        assert_eq!(user.id, 203);
    }

    #[tokio::test]
    async fn test_instances_have_independent_counters() {
        let a = MemoryStorage::new();
        let b = MemoryStorage::new();

        assert_eq!(a.create_save(1, 1).await.unwrap().id, 202);
        assert_eq!(b.create_save(1, 1).await.unwrap().id, 202);
    }

    #[tokio::test]
    async fn test_empty_catalog_starts_at_one() {
        let storage = MemoryStorage::with_catalog(Catalog::default());

        assert!(storage.get_articles(&[]).await.unwrap().is_empty());
        assert_eq!(storage.create_save(1, 1).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_session_store_is_shared_handle() {
        let sessions = Arc::new(SessionStore::default());
        let storage = MemoryStorage::new().with_session_store(sessions.clone());

        let id = sessions.create(1).await;

        assert!(storage.session_store().get(&id).await.is_some());
    }
}
