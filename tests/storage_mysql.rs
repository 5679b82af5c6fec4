//! Storage contract tests against a real MySQL server.
//!
//! Run with `DATABASE_URL` pointing at a server where the user may create
//! databases, then `cargo test --test storage_mysql -- --ignored`.

use chrono::{SubsecRound, TimeZone, Timelike, Utc};
use serde_json::json;
use sqlx::MySqlPool;
use std::sync::Arc;
use wardrobe::domain::entities::{NewOutfit, NewOutfitArticle, NewUser, Position};
use wardrobe::domain::repositories::{Storage, StorageError};
use wardrobe::infrastructure::persistence::{MySqlStorage, sample_catalog};

fn storage(pool: MySqlPool) -> MySqlStorage {
    MySqlStorage::new(Arc::new(pool))
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "$argon2id$opaque".to_string(),
        preferences: Some(json!({ "palette": ["navy", "olive"] })),
    }
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_create_user_then_lookup(pool: MySqlPool) {
    let storage = storage(pool);

    let created = storage.create_user(new_user("ada")).await.unwrap();
    let found = storage.get_user_by_username("ada").await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.preferences, Some(json!({ "palette": ["navy", "olive"] })));
    assert_eq!(storage.get_user(created.id).await.unwrap(), Some(created));
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_duplicate_username_is_conflict(pool: MySqlPool) {
    let storage = storage(pool);
    storage.create_user(new_user("ada")).await.unwrap();

    let err = storage.create_user(new_user("ada")).await.unwrap_err();

    assert!(matches!(err, StorageError::Conflict { entity: "user", .. }));
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_username_lookup_is_case_sensitive(pool: MySqlPool) {
    let storage = storage(pool);
    storage.create_user(new_user("Ada")).await.unwrap();

    assert!(storage.get_user_by_username("ada").await.unwrap().is_none());
    storage.create_user(new_user("ada")).await.unwrap();
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_trailing_space_makes_a_different_username(pool: MySqlPool) {
    let storage = storage(pool);
    let ada = storage.create_user(new_user("ada")).await.unwrap();

    assert!(storage.get_user_by_username("ada ").await.unwrap().is_none());
    let padded = storage.create_user(new_user("ada ")).await.unwrap();

    assert_ne!(padded.id, ada.id);
    assert_eq!(padded.username, "ada ");
    assert_eq!(storage.get_user_by_username("ada").await.unwrap(), Some(ada));
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_category_filter_is_case_sensitive(pool: MySqlPool) {
    let storage = storage(pool);
    storage.seed_catalog(&sample_catalog()).await.unwrap();

    let lower = storage
        .get_articles(&["casual".to_string()])
        .await
        .unwrap();

    assert!(lower.is_empty());
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_seed_and_filter_articles(pool: MySqlPool) {
    let storage = storage(pool);
    let catalog = sample_catalog();

    let inserted = storage.seed_catalog(&catalog).await.unwrap();
    assert_eq!(
        inserted as usize,
        catalog.articles.len() + catalog.outfits.len() + catalog.outfit_articles.len()
    );
    assert_eq!(storage.seed_catalog(&catalog).await.unwrap(), 0);

    assert_eq!(storage.get_articles(&[]).await.unwrap(), catalog.articles);

    let casual = storage
        .get_articles(&["Casual".to_string()])
        .await
        .unwrap();
    assert!(!casual.is_empty());
    assert!(casual.iter().all(|a| a.category == "Casual"));

    let none = storage
        .get_articles(&["Swimwear".to_string()])
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_create_outfit_round_trip(pool: MySqlPool) {
    let storage = storage(pool);
    let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

    let outfit = storage
        .create_outfit(NewOutfit {
            user_id: 1,
            image_url: "u".to_string(),
            description: Some("d".to_string()),
            created_at,
        })
        .await
        .unwrap();

    let outfits = storage.get_outfits().await.unwrap();
    assert_eq!(outfits, vec![outfit.clone()]);
    assert_eq!(outfit.created_at, created_at);
    assert_eq!(outfit.description.as_deref(), Some("d"));
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_create_outfit_keeps_microseconds_only(pool: MySqlPool) {
    let storage = storage(pool);
    let created_at = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
        .unwrap()
        .with_nanosecond(458_122_565)
        .unwrap();

    let outfit = storage
        .create_outfit(NewOutfit {
            user_id: 1,
            image_url: "u".to_string(),
            description: None,
            created_at,
        })
        .await
        .unwrap();

    assert_eq!(outfit.created_at, created_at.trunc_subsecs(6));
    assert_eq!(storage.get_outfits().await.unwrap(), vec![outfit]);
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_create_outfit_outside_timestamp_range(pool: MySqlPool) {
    let storage = storage(pool);
    let created_at = Utc.with_ymd_and_hms(2040, 1, 1, 0, 0, 0).unwrap();

    let outfit = storage
        .create_outfit(NewOutfit {
            user_id: 1,
            image_url: "u".to_string(),
            description: None,
            created_at,
        })
        .await
        .unwrap();

    assert_eq!(outfit.created_at, created_at);
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_delete_save_removes_oldest_match_only(pool: MySqlPool) {
    let storage = storage(pool);
    storage.create_save(1, 2).await.unwrap();
    let second = storage.create_save(1, 2).await.unwrap();
    let other = storage.create_save(1, 3).await.unwrap();

    storage.delete_save(1, 2).await.unwrap();
    assert_eq!(
        storage.get_saves_by_user(1).await.unwrap(),
        vec![second, other.clone()]
    );

    storage.delete_save(1, 2).await.unwrap();
    storage.delete_save(1, 2).await.unwrap();
    assert_eq!(storage.get_saves_by_user(1).await.unwrap(), vec![other]);
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_create_outfit_article_after_seed(pool: MySqlPool) {
    let storage = storage(pool);
    storage.seed_catalog(&sample_catalog()).await.unwrap();

    let oa = storage
        .create_outfit_article(NewOutfitArticle {
            outfit_id: 100,
            article_id: 2,
            position: Position::new(0.3, 0.5),
        })
        .await
        .unwrap();

    assert!(oa.id > 201);
    assert_eq!(oa.position, Position::new(0.3, 0.5));
    assert_eq!(storage.get_outfit_articles().await.unwrap().len(), 3);
}

#[sqlx::test]
#[ignore = "requires MySQL at DATABASE_URL"]
async fn test_health_check(pool: MySqlPool) {
    assert!(storage(pool).health_check().await);
}
