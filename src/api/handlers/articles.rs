//! Handler for the article catalog.

use axum::{
    Json,
    extract::{RawQuery, State},
};

use crate::api::dto::articles::ArticleQuery;
use crate::domain::entities::Article;
use crate::error::AppError;
use crate::state::AppState;

/// Lists articles, optionally restricted to a set of categories.
///
/// # Endpoint
///
/// `GET /api/articles?categories=Casual&categories=Formal`
///
/// See [`ArticleQuery`] for the accepted filter shapes. Results are ordered
/// by id.
pub async fn list_articles_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Article>>, AppError> {
    let filter = ArticleQuery::from_query_string(query.as_deref());
    let articles = state.storage.get_articles(&filter.categories).await?;

    Ok(Json(articles))
}
