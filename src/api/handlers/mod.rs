//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod articles;
pub mod auth;
pub mod health;
pub mod outfit_articles;
pub mod outfits;
pub mod saves;

pub use articles::list_articles_handler;
pub use auth::{current_user_handler, login_handler, logout_handler, register_handler};
pub use health::health_handler;
pub use outfit_articles::{create_outfit_article_handler, list_outfit_articles_handler};
pub use outfits::{create_outfit_handler, list_outfits_handler};
pub use saves::{create_save_handler, delete_save_handler, list_saves_handler};
