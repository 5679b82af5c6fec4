mod common;

use axum::http::StatusCode;
use axum::http::header::COOKIE;
use serde_json::{Value, json};

#[tokio::test]
async fn test_saves_require_session() {
    let server = common::create_test_server();

    server
        .get("/api/saves")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post("/api/saves")
        .json(&json!({ "articleId": 1 }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .delete("/api/saves/1")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_saves() {
    let server = common::create_test_server();
    let (user, cookie) = common::register(&server, "ada").await;

    let response = server
        .post("/api/saves")
        .add_header(COOKIE, cookie.clone())
        .json(&json!({ "articleId": 3 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let save = response.json::<Value>();
    assert_eq!(save["userId"], user["id"]);
    assert_eq!(save["articleId"], 3);

    let saves = server
        .get("/api/saves")
        .add_header(COOKIE, cookie)
        .await
        .json::<Vec<Value>>();
    assert_eq!(saves, vec![save]);
}

#[tokio::test]
async fn test_delete_save() {
    let server = common::create_test_server();
    let (_, cookie) = common::register(&server, "ada").await;

    for article_id in [2, 4] {
        server
            .post("/api/saves")
            .add_header(COOKIE, cookie.clone())
            .json(&json!({ "articleId": article_id }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
        .delete("/api/saves/2")
        .add_header(COOKIE, cookie.clone())
        .await
        .assert_status_ok();

    let saves = server
        .get("/api/saves")
        .add_header(COOKIE, cookie)
        .await
        .json::<Vec<Value>>();
    assert_eq!(saves.len(), 1);
    assert_eq!(saves[0]["articleId"], 4);
}

#[tokio::test]
async fn test_delete_missing_save_is_ok() {
    let server = common::create_test_server();
    let (_, cookie) = common::register(&server, "ada").await;

    server
        .delete("/api/saves/5")
        .add_header(COOKIE, cookie)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_saves_are_scoped_to_session_user() {
    let server = common::create_test_server();
    let (_, ada) = common::register(&server, "ada").await;
    let (_, grace) = common::register(&server, "grace").await;

    server
        .post("/api/saves")
        .add_header(COOKIE, ada.clone())
        .json(&json!({ "articleId": 1 }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete("/api/saves/1")
        .add_header(COOKIE, grace.clone())
        .await
        .assert_status_ok();

    let grace_saves = server
        .get("/api/saves")
        .add_header(COOKIE, grace)
        .await
        .json::<Vec<Value>>();
    let ada_saves = server
        .get("/api/saves")
        .add_header(COOKIE, ada)
        .await
        .json::<Vec<Value>>();

    assert!(grace_saves.is_empty());
    assert_eq!(ada_saves.len(), 1);
}

#[tokio::test]
async fn test_create_save_rejects_invalid_article_id() {
    let server = common::create_test_server();
    let (_, cookie) = common::register(&server, "ada").await;

    let response = server
        .post("/api/saves")
        .add_header(COOKIE, cookie)
        .json(&json!({ "articleId": 0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_save_with_non_numeric_id() {
    let server = common::create_test_server();
    let (_, cookie) = common::register(&server, "ada").await;

    let response = server
        .delete("/api/saves/jacket")
        .add_header(COOKIE, cookie)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["reason"].is_string());
}
