use serde::Deserialize;
use validator::Validate;

/// Request to bookmark an article for the signed-in user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaveRequest {
    #[validate(range(min = 1, message = "articleId must be positive"))]
    pub article_id: i64,
}
