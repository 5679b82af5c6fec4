//! User entity.

use serde_json::Value;

/// A registered account.
///
/// `password` is an opaque credential (a PHC hash string in practice); the
/// storage layer never inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub preferences: Option<Value>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub preferences: Option<Value>,
}

impl NewUser {
    /// Builds the stored record once the backend has assigned an id.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            preferences: self.preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_user_keeps_fields() {
        let new_user = NewUser {
            username: "ada".to_string(),
            password: "$argon2id$stub".to_string(),
            preferences: Some(json!({ "sizes": ["M"] })),
        };

        let user = new_user.clone().into_user(7);

        assert_eq!(user.id, 7);
        assert_eq!(user.username, new_user.username);
        assert_eq!(user.password, new_user.password);
        assert_eq!(user.preferences, new_user.preferences);
    }
}
