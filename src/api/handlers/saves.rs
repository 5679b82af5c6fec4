//! Handlers for the signed-in user's saved articles.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::saves::CreateSaveRequest;
use crate::domain::entities::{Save, User};
use crate::error::AppError;
use crate::state::AppState;

/// Bookmarks an article.
///
/// # Endpoint
///
/// `POST /api/saves` with `{ "articleId": 3 }`, answers `201 Created`.
///
/// Saving the same article twice creates two saves.
pub async fn create_save_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateSaveRequest>,
) -> Result<(StatusCode, Json<Save>), AppError> {
    payload.validate()?;

    let save = state
        .storage
        .create_save(user.id, payload.article_id)
        .await?;

    Ok((StatusCode::CREATED, Json(save)))
}

/// Removes a bookmark.
///
/// # Endpoint
///
/// `DELETE /api/saves/{articleId}`
///
/// Answers `200 OK` whether or not a save matched, `400` when the id is not
/// a number.
pub async fn delete_save_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    article_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(article_id) = article_id?;
    state.storage.delete_save(user.id, article_id).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/saves`
pub async fn list_saves_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Save>>, AppError> {
    let saves = state.storage.get_saves_by_user(user.id).await?;
    Ok(Json(saves))
}
