//! Article entity representing a purchasable clothing item.

use serde::Serialize;

/// A clothing item from the catalog.
///
/// `price` is expressed in the minor currency unit (cents), so it can never be
/// negative or fractional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub brand: String,
    pub name: String,
    pub price: u32,
    pub category: String,
    pub image_url: String,
    pub product_url: String,
}

impl Article {
    /// Returns true if the article belongs to one of `categories`.
    ///
    /// An empty filter matches every article.
    pub fn matches_categories(&self, categories: &[String]) -> bool {
        categories.is_empty() || categories.iter().any(|c| c == &self.category)
    }
}
