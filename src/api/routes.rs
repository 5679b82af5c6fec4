//! API route configuration.
//!
//! Routes are split into a public set and a set protected by
//! [`crate::api::middleware::session`]. Both are merged under `/api`.

use crate::api::handlers::{
    create_outfit_article_handler, create_outfit_handler, create_save_handler,
    current_user_handler, delete_save_handler, list_articles_handler,
    list_outfit_articles_handler, list_outfits_handler, list_saves_handler, login_handler,
    logout_handler, register_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `POST /register`         - Create an account and sign in
/// - `POST /login`            - Sign in
/// - `POST /logout`           - Sign out (no-op without a session)
/// - `GET  /articles`         - Article catalog with category filter
/// - `GET  /outfits`          - All outfits
/// - `GET  /outfit-articles`  - All article placements
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/articles", get(list_articles_handler))
        .route("/outfits", get(list_outfits_handler))
        .route("/outfit-articles", get(list_outfit_articles_handler))
}

/// Routes that require a valid `sid` cookie.
///
/// # Endpoints
///
/// - `GET    /user`               - Current user
/// - `GET    /saves`              - Saves of the current user
/// - `POST   /saves`              - Save an article
/// - `DELETE /saves/{articleId}`  - Remove a save
/// - `POST   /outfits`            - Publish an outfit
/// - `POST   /outfit-articles`    - Place an article in an outfit
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(current_user_handler))
        .route("/saves", get(list_saves_handler).post(create_save_handler))
        .route("/saves/{article_id}", delete(delete_save_handler))
        .route("/outfits", post(create_outfit_handler))
        .route("/outfit-articles", post(create_outfit_article_handler))
}
