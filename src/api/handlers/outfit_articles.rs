use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::outfit_articles::CreateOutfitArticleRequest;
use crate::domain::entities::OutfitArticle;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/outfit-articles`
pub async fn list_outfit_articles_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OutfitArticle>>, AppError> {
    Ok(Json(state.storage.get_outfit_articles().await?))
}

/// Places an article inside an outfit.
///
/// # Endpoint
///
/// `POST /api/outfit-articles`
///
/// ```json
/// { "outfitId": 100, "articleId": 3, "position": { "x": 0.4, "y": 0.6 } }
/// ```
///
/// Both coordinates must lie in `0.0..=1.0`. Referenced ids are not checked
/// for existence.
pub async fn create_outfit_article_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateOutfitArticleRequest>,
) -> Result<(StatusCode, Json<OutfitArticle>), AppError> {
    payload.validate()?;

    let outfit_article = state.storage.create_outfit_article(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(outfit_article)))
}
