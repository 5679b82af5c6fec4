//! DTOs for registration, login and the current-user endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::User;

/// Request to create an account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Free-form JSON document stored verbatim.
    #[serde(default)]
    pub preferences: Option<Value>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public view of a user. The stored credential is never serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            preferences: user.preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            username: "ada".into(),
            password: "long-enough".into(),
            preferences: None,
        };
        assert!(ok.validate().is_ok());

        let short_user = RegisterRequest {
            username: "ad".into(),
            ..ok
        };
        let errors = short_user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_short_password_rejected() {
        let req = RegisterRequest {
            username: "ada".into(),
            password: "short".into(),
            preferences: None,
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("password"));
    }

    #[test]
    fn test_user_response_hides_password() {
        let user = User {
            id: 5,
            username: "ada".into(),
            password: "$argon2id$secret".into(),
            preferences: Some(json!({ "style": "minimal" })),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["preferences"]["style"], "minimal");
        assert!(json.get("password").is_none());
    }
}
