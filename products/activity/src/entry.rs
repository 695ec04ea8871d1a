use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::topic::Topic;

/// Identity of the logged-in user looking at the feed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Viewer {
    pub id: i64,
}

impl Viewer {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct UserRef {
    pub id: i64,
    pub first_name: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct TableRef {
    pub display_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct DatabaseRef {
    pub name: Option<String>,
}

/// Card snapshot recorded by `dashboard-add-cards` / `dashboard-remove-cards`.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct DashcardRef {
    pub name: Option<String>,
    #[serde(default)]
    pub exists: bool,
    pub card_id: Option<i64>,
}

/// Topic-specific payload captured when the event happened.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Details {
    pub name: Option<String>,
    pub description: Option<String>,
    pub revision_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dashcards: Vec<DashcardRef>,
}

/// One row of the activity log as served by the activity API.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ActivityEntry {
    pub id: i64,
    pub topic: Topic,
    pub user_id: Option<i64>,
    pub user: Option<UserRef>,
    #[serde(default)]
    pub model_exists: bool,
    pub model: Option<String>,
    pub model_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Details,
    pub table: Option<TableRef>,
    pub database: Option<DatabaseRef>,
    pub database_id: Option<i64>,
    pub table_id: Option<i64>,
    pub timestamp: DateTime<Utc>,
}

/// Explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ActivityEntry {
    pub fn is_by(&self, viewer: Viewer) -> bool {
        self.user.as_ref().is_some_and(|user| user.id == viewer.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_payload_deserializes_with_defaults() {
        let entry: ActivityEntry = serde_json::from_value(json!({
            "id": 1,
            "topic": "install",
            "user_id": null,
            "timestamp": "2024-03-01T10:00:00Z",
        }))
        .unwrap();
        assert_eq!(entry.topic, Topic::Install);
        assert!(!entry.model_exists);
        assert_eq!(entry.details, Details::default());
        assert!(entry.user.is_none());
    }

    #[test]
    fn dashcards_and_extra_detail_keys_are_accepted() {
        let entry: ActivityEntry = serde_json::from_value(json!({
            "id": 2,
            "topic": "dashboard-add-cards",
            "user_id": 4,
            "user": {"id": 4, "first_name": "Ada", "last_name": "Lovelace"},
            "model": "dashboard",
            "model_id": 9,
            "model_exists": true,
            "details": {
                "name": "Ops",
                "description": null,
                "dashcards": [{"name": "Revenue", "exists": true, "card_id": 3, "id": 77}]
            },
            "timestamp": "2024-03-01T10:00:00Z",
        }))
        .unwrap();
        assert_eq!(entry.details.dashcards.len(), 1);
        assert_eq!(entry.details.dashcards[0].card_id, Some(3));
        assert!(entry.is_by(Viewer::new(4)));
        assert!(!entry.is_by(Viewer::new(5)));
    }

    #[test]
    fn null_details_and_names_are_tolerated() {
        let entry: ActivityEntry = serde_json::from_value(json!({
            "id": 3,
            "topic": "card-create",
            "user_id": 2,
            "user": {"id": 2, "first_name": null},
            "details": null,
            "timestamp": "2024-03-01T10:00:00Z",
        }))
        .unwrap();
        assert_eq!(entry.details, Details::default());
        assert_eq!(entry.user.map(|user| user.first_name), Some(None));

        let details: Details = serde_json::from_value(json!({"dashcards": null})).unwrap();
        assert!(details.dashcards.is_empty());
    }
}
