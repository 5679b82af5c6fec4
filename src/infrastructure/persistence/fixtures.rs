//! Sample catalog used to seed the in-memory backend and `admin seed`.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Article, Outfit, OutfitArticle, Position};

/// A fixed set of articles, outfits and placements with explicit ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub articles: Vec<Article>,
    pub outfits: Vec<Outfit>,
    pub outfit_articles: Vec<OutfitArticle>,
}

impl Catalog {
    /// Highest id across all entity kinds, or 0 for an empty catalog.
    pub fn max_id(&self) -> i64 {
        let articles = self.articles.iter().map(|a| a.id);
        let outfits = self.outfits.iter().map(|o| o.id);
        let placements = self.outfit_articles.iter().map(|oa| oa.id);

        articles.chain(outfits).chain(placements).max().unwrap_or(0)
    }
}

fn article(
    id: i64,
    brand: &str,
    name: &str,
    price: u32,
    category: &str,
    slug: &str,
) -> Article {
    Article {
        id,
        brand: brand.to_string(),
        name: name.to_string(),
        price,
        category: category.to_string(),
        image_url: format!("/images/articles/{slug}.jpg"),
        product_url: format!("https://shop.example.com/products/{slug}"),
    }
}

fn fixed_time(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default()
}

/// The built-in sample catalog.
///
/// Articles use ids 1-6, outfits 100-101 and placements 200-201.
pub fn sample_catalog() -> Catalog {
    let articles = vec![
        article(1, "Levi's", "501 Original Jeans", 6_950, "Casual", "levis-501"),
        article(2, "Uniqlo", "Oxford Shirt", 2_990, "Casual", "uniqlo-oxford"),
        article(3, "Hugo Boss", "Slim-Fit Wool Suit", 59_900, "Formal", "boss-wool-suit"),
        article(4, "Nike", "Air Zoom Pegasus", 12_000, "Sportswear", "nike-pegasus"),
        article(5, "Patagonia", "Nano Puff Jacket", 23_900, "Outerwear", "patagonia-nano-puff"),
        article(6, "COS", "Silk Midi Dress", 13_500, "Formal", "cos-silk-midi"),
    ];

    let outfits = vec![
        Outfit {
            id: 100,
            user_id: 1,
            image_url: "/uploads/outfit-100.jpg".to_string(),
            description: Some("Weekend denim".to_string()),
            created_at: fixed_time(1_717_200_000),
        },
        Outfit {
            id: 101,
            user_id: 1,
            image_url: "/uploads/outfit-101.jpg".to_string(),
            description: None,
            created_at: fixed_time(1_717_286_400),
        },
    ];

    let outfit_articles = vec![
        OutfitArticle {
            id: 200,
            outfit_id: 100,
            article_id: 1,
            position: Position::new(0.5, 0.7),
        },
        OutfitArticle {
            id: 201,
            outfit_id: 100,
            article_id: 2,
            position: Position::new(0.5, 0.3),
        },
    ];

    Catalog {
        articles,
        outfits,
        outfit_articles,
    }
}
