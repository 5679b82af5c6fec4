#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};
use std::sync::Arc;
use wardrobe::api::middleware::session::SessionCookie;
use wardrobe::domain::entities::{
    Article, NewOutfit, NewOutfitArticle, NewUser, Outfit, OutfitArticle, Save, User,
};
use wardrobe::domain::repositories::{Storage, StorageError, StorageResult};
use wardrobe::infrastructure::persistence::MemoryStorage;
use wardrobe::infrastructure::session::SessionStore;
use wardrobe::routes::router;
use wardrobe::state::AppState;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn create_test_state(storage: Arc<dyn Storage>) -> AppState {
    AppState::new(
        storage,
        SessionCookie {
            max_age_secs: 3600,
            secure: false,
        },
    )
}

/// Full application over the given backend.
pub fn create_server_with(storage: Arc<dyn Storage>) -> TestServer {
    TestServer::new(router(create_test_state(storage), 1024 * 1024)).unwrap()
}

/// Full application over a fresh, fixture-seeded in-memory backend.
pub fn create_test_server() -> TestServer {
    create_server_with(Arc::new(MemoryStorage::new()))
}

/// The `name=value` part of the response's `Set-Cookie` header, ready to be
/// sent back as a `Cookie` header.
pub fn session_cookie(response: &TestResponse) -> HeaderValue {
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap();
    let pair = set_cookie.split(';').next().unwrap();

    HeaderValue::from_str(pair).unwrap()
}

/// Registers `username` and returns the user JSON and the session cookie.
pub async fn register(server: &TestServer, username: &str) -> (Value, HeaderValue) {
    let response = server
        .post("/api/register")
        .json(&json!({
            "username": username,
            "password": TEST_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let cookie = session_cookie(&response);

    (response.json::<Value>(), cookie)
}

/// Backend whose every operation fails as if the database went away.
pub struct UnavailableStorage {
    sessions: Arc<SessionStore>,
}

impl UnavailableStorage {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(SessionStore::default()),
        }
    }
}

fn unavailable<T>() -> StorageResult<T> {
    Err(StorageError::Database(sqlx::Error::PoolClosed))
}

#[async_trait]
impl Storage for UnavailableStorage {
    async fn get_user(&self, _id: i64) -> StorageResult<Option<User>> {
        unavailable()
    }

    async fn get_user_by_username(&self, _username: &str) -> StorageResult<Option<User>> {
        unavailable()
    }

    async fn create_user(&self, _new_user: NewUser) -> StorageResult<User> {
        unavailable()
    }

    async fn get_articles(&self, _categories: &[String]) -> StorageResult<Vec<Article>> {
        unavailable()
    }

    async fn create_save(&self, _user_id: i64, _article_id: i64) -> StorageResult<Save> {
        unavailable()
    }

    async fn delete_save(&self, _user_id: i64, _article_id: i64) -> StorageResult<()> {
        unavailable()
    }

    async fn get_saves_by_user(&self, _user_id: i64) -> StorageResult<Vec<Save>> {
        unavailable()
    }

    async fn get_outfits(&self) -> StorageResult<Vec<Outfit>> {
        unavailable()
    }

    async fn create_outfit(&self, _outfit: NewOutfit) -> StorageResult<Outfit> {
        unavailable()
    }

    async fn get_outfit_articles(&self) -> StorageResult<Vec<OutfitArticle>> {
        unavailable()
    }

    async fn create_outfit_article(
        &self,
        _outfit_article: NewOutfitArticle,
    ) -> StorageResult<OutfitArticle> {
        unavailable()
    }

    fn session_store(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    async fn health_check(&self) -> bool {
        false
    }
}
