//! MySQL implementation of the storage contract.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::mysql::{MySqlQueryResult, MySqlRow};
use sqlx::types::Json;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};
use tracing::debug;

use super::fixtures::Catalog;
use crate::domain::entities::{
    Article, NewOutfit, NewOutfitArticle, NewUser, Outfit, OutfitArticle, Position, Save, User,
    storage_precision,
};
use crate::domain::repositories::{Storage, StorageError, StorageResult};
use crate::infrastructure::session::SessionStore;
use crate::utils::db_error::is_unique_violation;

// Column lists shared across queries to avoid repetition.
const USER_COLUMNS: &str = "id, username, password, preferences";
const ARTICLE_COLUMNS: &str = "id, brand, name, price, category, image_url, product_url";
const SAVE_COLUMNS: &str = "id, user_id, article_id";
const OUTFIT_COLUMNS: &str = "id, user_id, image_url, description, created_at";
const OUTFIT_ARTICLE_COLUMNS: &str = "id, outfit_id, article_id, position";

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    preferences: Option<Json<Value>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password: row.password,
            preferences: row.preferences.map(|Json(v)| v),
        }
    }
}

#[derive(FromRow)]
struct ArticleRow {
    id: i64,
    brand: String,
    name: String,
    price: u32,
    category: String,
    image_url: String,
    product_url: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            brand: row.brand,
            name: row.name,
            price: row.price,
            category: row.category,
            image_url: row.image_url,
            product_url: row.product_url,
        }
    }
}

#[derive(FromRow)]
struct SaveRow {
    id: i64,
    user_id: i64,
    article_id: i64,
}

impl From<SaveRow> for Save {
    fn from(row: SaveRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            article_id: row.article_id,
        }
    }
}

#[derive(FromRow)]
struct OutfitRow {
    id: i64,
    user_id: i64,
    image_url: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<OutfitRow> for Outfit {
    fn from(row: OutfitRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            image_url: row.image_url,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct OutfitArticleRow {
    id: i64,
    outfit_id: i64,
    article_id: i64,
    position: Json<Position>,
}

impl From<OutfitArticleRow> for OutfitArticle {
    fn from(row: OutfitArticleRow) -> Self {
        Self {
            id: row.id,
            outfit_id: row.outfit_id,
            article_id: row.article_id,
            position: row.position.0,
        }
    }
}

/// Id assigned by `AUTO_INCREMENT` to the row just inserted.
fn inserted_id(result: &MySqlQueryResult) -> i64 {
    result.last_insert_id() as i64
}

/// MySQL repository for every wardrobe entity.
///
/// Each read is one parameterized `SELECT`; each create is an `INSERT`
/// followed by a `SELECT` of the new row so the returned record reflects
/// database defaults. No transactions, no retries: pooling and queueing are
/// left to [`MySqlPool`].
pub struct MySqlStorage {
    pool: Arc<MySqlPool>,
    sessions: Arc<SessionStore>,
}

impl MySqlStorage {
    /// Creates a new storage backend over a connection pool.
    pub fn new(pool: Arc<MySqlPool>) -> Self {
        Self {
            pool,
            sessions: Arc::new(SessionStore::default()),
        }
    }

    /// Replaces the session store handed out by [`Storage::session_store`].
    pub fn with_session_store(mut self, sessions: Arc<SessionStore>) -> Self {
        self.sessions = sessions;
        self
    }

    /// Reads back a row by id right after it was inserted.
    async fn fetch_inserted<R>(&self, table: &'static str, columns: &str, id: i64) -> StorageResult<R>
    where
        R: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let query = format!("SELECT {columns} FROM {table} WHERE id = ?");
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StorageError::MissingRow { table, id })
    }

    /// Inserts a catalog with its explicit ids, skipping rows that already exist.
    ///
    /// Returns the number of rows actually inserted.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] on the first failing insert. Rows
    /// inserted before the failure stay in place.
    pub async fn seed_catalog(&self, catalog: &Catalog) -> StorageResult<u64> {
        let mut inserted = 0;

        for article in &catalog.articles {
            inserted += sqlx::query(
                "INSERT IGNORE INTO articles (id, brand, name, price, category, image_url, product_url)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(article.id)
            .bind(&article.brand)
            .bind(&article.name)
            .bind(article.price)
            .bind(&article.category)
            .bind(&article.image_url)
            .bind(&article.product_url)
            .execute(self.pool.as_ref())
            .await?
            .rows_affected();
        }

        for outfit in &catalog.outfits {
            inserted += sqlx::query(
                "INSERT IGNORE INTO outfits (id, user_id, image_url, description, created_at)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(outfit.id)
            .bind(outfit.user_id)
            .bind(&outfit.image_url)
            .bind(&outfit.description)
            .bind(outfit.created_at)
            .execute(self.pool.as_ref())
            .await?
            .rows_affected();
        }

        for oa in &catalog.outfit_articles {
            inserted += sqlx::query(
                "INSERT IGNORE INTO outfit_articles (id, outfit_id, article_id, position)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(oa.id)
            .bind(oa.outfit_id)
            .bind(oa.article_id)
            .bind(serde_json::to_string(&oa.position)?)
            .execute(self.pool.as_ref())
            .await?
            .rows_affected();
        }

        debug!(inserted, "Catalog seeded");
        Ok(inserted)
    }
}

#[async_trait]
impl Storage for MySqlStorage {
    async fn get_user(&self, id: i64) -> StorageResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        // `username` uses a binary collation, so `=` is case-sensitive.
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(username)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn create_user(&self, new_user: NewUser) -> StorageResult<User> {
        let preferences = new_user
            .preferences
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let result = sqlx::query("INSERT INTO users (username, password, preferences) VALUES (?, ?, ?)")
            .bind(&new_user.username)
            .bind(&new_user.password)
            .bind(preferences)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::conflict(
                        "user",
                        format!("username '{}' is taken", new_user.username),
                    )
                } else {
                    StorageError::Database(e)
                }
            })?;

        let id = inserted_id(&result);
        debug!(user_id = id, "User created");

        let row: UserRow = self.fetch_inserted("users", USER_COLUMNS, id).await?;
        Ok(row.into())
    }

    async fn get_articles(&self, categories: &[String]) -> StorageResult<Vec<Article>> {
        let mut builder =
            QueryBuilder::<MySql>::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));

        if !categories.is_empty() {
            builder.push(" WHERE category IN (");
            let mut values = builder.separated(", ");
            for category in categories {
                values.push_bind(category.as_str());
            }
            values.push_unseparated(")");
        }
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn create_save(&self, user_id: i64, article_id: i64) -> StorageResult<Save> {
        let result = sqlx::query("INSERT INTO saves (user_id, article_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(article_id)
            .execute(self.pool.as_ref())
            .await?;

        let id = inserted_id(&result);
        debug!(save_id = id, user_id, article_id, "Save created");

        let row: SaveRow = self.fetch_inserted("saves", SAVE_COLUMNS, id).await?;
        Ok(row.into())
    }

    async fn delete_save(&self, user_id: i64, article_id: i64) -> StorageResult<()> {
        let result = sqlx::query(
            "DELETE FROM saves WHERE user_id = ? AND article_id = ? ORDER BY id LIMIT 1",
        )
        .bind(user_id)
        .bind(article_id)
        .execute(self.pool.as_ref())
        .await?;

        debug!(
            user_id,
            article_id,
            deleted = result.rows_affected(),
            "Save delete"
        );
        Ok(())
    }

    async fn get_saves_by_user(&self, user_id: i64) -> StorageResult<Vec<Save>> {
        let query = format!("SELECT {SAVE_COLUMNS} FROM saves WHERE user_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, SaveRow>(&query)
            .bind(user_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Save::from).collect())
    }

    async fn get_outfits(&self) -> StorageResult<Vec<Outfit>> {
        let query = format!("SELECT {OUTFIT_COLUMNS} FROM outfits ORDER BY id");
        let rows = sqlx::query_as::<_, OutfitRow>(&query)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Outfit::from).collect())
    }

    async fn create_outfit(&self, outfit: NewOutfit) -> StorageResult<Outfit> {
        let result = sqlx::query(
            "INSERT INTO outfits (user_id, image_url, description, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(outfit.user_id)
        .bind(&outfit.image_url)
        .bind(&outfit.description)
        .bind(storage_precision(outfit.created_at))
        .execute(self.pool.as_ref())
        .await?;

        let id = inserted_id(&result);
        debug!(outfit_id = id, user_id = outfit.user_id, "Outfit created");

        let row: OutfitRow = self.fetch_inserted("outfits", OUTFIT_COLUMNS, id).await?;
        Ok(row.into())
    }

    async fn get_outfit_articles(&self) -> StorageResult<Vec<OutfitArticle>> {
        let query = format!("SELECT {OUTFIT_ARTICLE_COLUMNS} FROM outfit_articles ORDER BY id");
        let rows = sqlx::query_as::<_, OutfitArticleRow>(&query)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(OutfitArticle::from).collect())
    }

    async fn create_outfit_article(
        &self,
        outfit_article: NewOutfitArticle,
    ) -> StorageResult<OutfitArticle> {
        let position = serde_json::to_string(&outfit_article.position)?;

        let result = sqlx::query(
            "INSERT INTO outfit_articles (outfit_id, article_id, position) VALUES (?, ?, ?)",
        )
        .bind(outfit_article.outfit_id)
        .bind(outfit_article.article_id)
        .bind(position)
        .execute(self.pool.as_ref())
        .await?;

        let id = inserted_id(&result);
        debug!(outfit_article_id = id, "Outfit article created");

        let row: OutfitArticleRow = self
            .fetch_inserted("outfit_articles", OUTFIT_ARTICLE_COLUMNS, id)
            .await?;
        Ok(row.into())
    }

    fn session_store(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
