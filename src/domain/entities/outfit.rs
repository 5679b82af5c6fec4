//! Outfit entity representing a user-curated composition.

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

/// Truncates a timestamp to the microsecond precision every backend can hold.
pub fn storage_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(6)
}

/// An outfit published by a user.
///
/// `created_at` is fixed when the outfit is created and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: i64,
    pub user_id: i64,
    pub image_url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new outfit.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOutfit {
    pub user_id: i64,
    pub image_url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewOutfit {
    /// Builds the stored record once the backend has assigned an id.
    pub fn into_outfit(self, id: i64) -> Outfit {
        Outfit {
            id,
            user_id: self.user_id,
            image_url: self.image_url,
            description: self.description,
            created_at: storage_precision(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_into_outfit_drops_sub_microsecond_digits() {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
            .unwrap()
            .with_nanosecond(458_122_565)
            .unwrap();

        let outfit = NewOutfit {
            user_id: 1,
            image_url: "u".to_string(),
            description: None,
            created_at: at,
        }
        .into_outfit(7);

        assert_eq!(outfit.created_at.nanosecond(), 458_122_000);
        assert_eq!(storage_precision(outfit.created_at), outfit.created_at);
    }
}
