use axum::{Extension, Json, extract::State, http::StatusCode};
use chrono::Utc;
use validator::Validate;

use crate::api::dto::outfits::CreateOutfitRequest;
use crate::domain::entities::{NewOutfit, Outfit, User, storage_precision};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/outfits`
pub async fn list_outfits_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Outfit>>, AppError> {
    Ok(Json(state.storage.get_outfits().await?))
}

/// Publishes an outfit owned by the signed-in user.
///
/// `POST /api/outfits`. The creation timestamp is taken when the request is
/// handled; clients cannot supply one.
pub async fn create_outfit_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateOutfitRequest>,
) -> Result<(StatusCode, Json<Outfit>), AppError> {
    payload.validate()?;

    let outfit = state
        .storage
        .create_outfit(NewOutfit {
            user_id: user.id,
            image_url: payload.image_url,
            description: payload.description,
            created_at: storage_precision(Utc::now()),
        })
        .await?;

    tracing::info!(outfit_id = outfit.id, user_id = user.id, "Outfit created");

    Ok((StatusCode::CREATED, Json(outfit)))
}
