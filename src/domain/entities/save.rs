//! Save entity: a user's bookmark of an article.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Save {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
}

impl Save {
    /// Returns true if this save binds `user_id` to `article_id`.
    pub fn is_for(&self, user_id: i64, article_id: i64) -> bool {
        self.user_id == user_id && self.article_id == article_id
    }
}
