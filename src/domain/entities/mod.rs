//! Core domain entities representing the wardrobe data model.
//!
//! Entities are plain data structures handed out by value: every read from a
//! [`crate::domain::repositories::Storage`] backend returns an independent copy.
//!
//! # Entity Types
//!
//! - [`User`] - An account that saves articles and publishes outfits
//! - [`Article`] - A purchasable clothing item
//! - [`Save`] - A bookmark of an article by a user
//! - [`Outfit`] - A user-curated composition rendered as an image
//! - [`OutfitArticle`] - Placement of an article inside an outfit
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! (`NewUser`, `NewOutfit`, `NewOutfitArticle`). Identifiers are always
//! assigned by the storage backend, never by the caller.

pub mod article;
pub mod outfit;
pub mod outfit_article;
pub mod save;
pub mod user;

pub use article::Article;
pub use outfit::{NewOutfit, Outfit, storage_precision};
pub use outfit_article::{NewOutfitArticle, OutfitArticle, Position};
pub use save::Save;
pub use user::{NewUser, User};
