use serde::Deserialize;
use validator::Validate;

/// Request to publish an outfit. Owner and timestamp come from the server.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutfitRequest {
    #[validate(length(min = 1, max = 2048, message = "imageUrl must be 1-2048 characters"))]
    pub image_url: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}
