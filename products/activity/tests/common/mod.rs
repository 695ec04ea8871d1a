#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use products_activity::{ActivityEntry, UrlBuilder};
use serde_json::{Value, json};

pub const VIEWER_ID: i64 = 1;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Entry by user 2 with every snapshot populated; `overrides` wins per key.
pub fn entry(topic: &str, model_exists: bool, overrides: Value) -> ActivityEntry {
    let mut base = json!({
        "id": 100,
        "topic": topic,
        "user_id": 2,
        "user": {"id": 2, "first_name": "Grace"},
        "model": "card",
        "model_id": 7,
        "model_exists": model_exists,
        "database_id": 3,
        "table_id": 4,
        "table": {"display_name": "Orders"},
        "database": {"name": "Warehouse"},
        "details": {
            "name": "Sales",
            "description": "Monthly sales",
            "revision_message": "tweak filter",
            "dashcards": [
                {"name": "Revenue", "exists": true, "card_id": 8},
                {"name": "Churn", "exists": true, "card_id": 9}
            ]
        },
        "timestamp": "2024-06-01T10:00:00Z"
    });
    if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(base).unwrap()
}

/// Router with a recognizable shape so tests can tell which route was used.
pub struct TestUrls;

impl UrlBuilder for TestUrls {
    fn question(&self, card_id: i64) -> String {
        format!("q:{card_id}")
    }

    fn dashboard(&self, dashboard_id: i64) -> String {
        format!("d:{dashboard_id}")
    }

    fn pulse(&self, pulse_id: i64) -> String {
        format!("p:{pulse_id}")
    }

    fn table_rows_query(
        &self,
        database_id: Option<i64>,
        table_id: Option<i64>,
        metric_id: Option<i64>,
        segment_id: Option<i64>,
    ) -> String {
        format!("t:{database_id:?}/{table_id:?}/{metric_id:?}/{segment_id:?}")
    }
}
