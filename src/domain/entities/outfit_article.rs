//! Placement of an article on an outfit canvas.

use serde::{Deserialize, Serialize};

/// Normalized 2D canvas coordinate.
///
/// Both axes are expected in `0.0..=1.0`; range checks happen at the API
/// boundary, storage keeps whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An article placed inside an outfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitArticle {
    pub id: i64,
    pub outfit_id: i64,
    pub article_id: i64,
    pub position: Position,
}

/// Input data for placing an article in an outfit.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOutfitArticle {
    pub outfit_id: i64,
    pub article_id: i64,
    pub position: Position,
}

impl NewOutfitArticle {
    /// Builds the stored record once the backend has assigned an id.
    pub fn into_outfit_article(self, id: i64) -> OutfitArticle {
        OutfitArticle {
            id,
            outfit_id: self.outfit_id,
            article_id: self.article_id,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_json_shape() {
        let json = serde_json::to_value(Position::new(0.3, 0.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 0.3, "y": 0.5 }));
    }

    #[test]
    fn test_outfit_article_serializes_camel_case() {
        let oa = NewOutfitArticle {
            outfit_id: 100,
            article_id: 2,
            position: Position::new(0.1, 0.9),
        }
        .into_outfit_article(300);

        let json = serde_json::to_value(&oa).unwrap();
        assert_eq!(json["id"], 300);
        assert_eq!(json["outfitId"], 100);
        assert_eq!(json["articleId"], 2);
        assert_eq!(json["position"]["y"], 0.9);
    }
}
