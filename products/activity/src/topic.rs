use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of event an activity entry records.
///
/// Unrecognized tags survive as [`Topic::Other`] so a newer server can never
/// break an older feed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Topic {
    AlertCreate,
    AlertDelete,
    CardCreate,
    CardUpdate,
    CardDelete,
    DashboardCreate,
    DashboardDelete,
    DashboardAddCards,
    DashboardRemoveCards,
    DatabaseSync,
    Install,
    MetricCreate,
    MetricUpdate,
    MetricDelete,
    PulseCreate,
    PulseDelete,
    SegmentCreate,
    SegmentUpdate,
    SegmentDelete,
    UserJoined,
    Other(String),
}

pub const KNOWN_TAGS: &[&str] = &[
    "alert-create",
    "alert-delete",
    "card-create",
    "card-update",
    "card-delete",
    "dashboard-create",
    "dashboard-delete",
    "dashboard-add-cards",
    "dashboard-remove-cards",
    "database-sync",
    "install",
    "metric-create",
    "metric-update",
    "metric-delete",
    "pulse-create",
    "pulse-delete",
    "segment-create",
    "segment-update",
    "segment-delete",
    "user-joined",
];

impl Topic {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "alert-create" => Topic::AlertCreate,
            "alert-delete" => Topic::AlertDelete,
            "card-create" => Topic::CardCreate,
            "card-update" => Topic::CardUpdate,
            "card-delete" => Topic::CardDelete,
            "dashboard-create" => Topic::DashboardCreate,
            "dashboard-delete" => Topic::DashboardDelete,
            "dashboard-add-cards" => Topic::DashboardAddCards,
            "dashboard-remove-cards" => Topic::DashboardRemoveCards,
            "database-sync" => Topic::DatabaseSync,
            "install" => Topic::Install,
            "metric-create" => Topic::MetricCreate,
            "metric-update" => Topic::MetricUpdate,
            "metric-delete" => Topic::MetricDelete,
            "pulse-create" => Topic::PulseCreate,
            "pulse-delete" => Topic::PulseDelete,
            "segment-create" => Topic::SegmentCreate,
            "segment-update" => Topic::SegmentUpdate,
            "segment-delete" => Topic::SegmentDelete,
            "user-joined" => Topic::UserJoined,
            other => Topic::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Topic::AlertCreate => "alert-create",
            Topic::AlertDelete => "alert-delete",
            Topic::CardCreate => "card-create",
            Topic::CardUpdate => "card-update",
            Topic::CardDelete => "card-delete",
            Topic::DashboardCreate => "dashboard-create",
            Topic::DashboardDelete => "dashboard-delete",
            Topic::DashboardAddCards => "dashboard-add-cards",
            Topic::DashboardRemoveCards => "dashboard-remove-cards",
            Topic::DatabaseSync => "database-sync",
            Topic::Install => "install",
            Topic::MetricCreate => "metric-create",
            Topic::MetricUpdate => "metric-update",
            Topic::MetricDelete => "metric-delete",
            Topic::PulseCreate => "pulse-create",
            Topic::PulseDelete => "pulse-delete",
            Topic::SegmentCreate => "segment-create",
            Topic::SegmentUpdate => "segment-update",
            Topic::SegmentDelete => "segment-delete",
            Topic::UserJoined => "user-joined",
            Topic::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Topic::Other(_))
    }
}

impl From<String> for Topic {
    fn from(value: String) -> Self {
        Topic::parse(&value)
    }
}

impl From<Topic> for String {
    fn from(value: Topic) -> Self {
        match value {
            Topic::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_tag_parses_to_a_known_topic() {
        for tag in KNOWN_TAGS {
            let topic = Topic::parse(tag);
            assert!(topic.is_known(), "{tag} should be known");
            assert_eq!(topic.as_str(), *tag);
        }
    }

    #[test]
    fn unknown_tags_are_preserved() {
        let topic: Topic = serde_json::from_str("\"collection-archive\"").unwrap();
        assert_eq!(topic, Topic::Other("collection-archive".into()));
        assert_eq!(
            serde_json::to_string(&topic).unwrap(),
            "\"collection-archive\""
        );
    }
}
