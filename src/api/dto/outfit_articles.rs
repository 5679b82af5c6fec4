//! DTOs for placing articles inside outfits.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{NewOutfitArticle, Position};

/// Normalized coordinates relative to the outfit image.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PositionInput {
    #[validate(range(min = 0.0, max = 1.0))]
    pub x: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub y: f64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutfitArticleRequest {
    #[validate(range(min = 1))]
    pub outfit_id: i64,

    #[validate(range(min = 1))]
    pub article_id: i64,

    #[validate(nested)]
    pub position: PositionInput,
}

impl From<CreateOutfitArticleRequest> for NewOutfitArticle {
    fn from(req: CreateOutfitArticleRequest) -> Self {
        NewOutfitArticle {
            outfit_id: req.outfit_id,
            article_id: req.article_id,
            position: Position::new(req.position.x, req.position.y),
        }
    }
}
