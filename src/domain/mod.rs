//! Domain layer containing wardrobe entities and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Users, articles, saves, outfits and article placements
//! - [`repositories`] - The [`repositories::Storage`] trait and its error type
//!
//! The domain layer has no dependency on HTTP or on any particular database;
//! concrete backends live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
