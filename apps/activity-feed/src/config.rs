use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub viewer_id: Option<i64>,
    pub site_url: String,
    pub catalog_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let viewer_id = match non_empty(lookup("ACTIVITY_VIEWER_ID")) {
            Some(raw) => Some(
                raw.parse::<i64>()
                    .with_context(|| format!("invalid ACTIVITY_VIEWER_ID {raw:?}"))?,
            ),
            None => None,
        };
        let site_url = non_empty(lookup("ACTIVITY_SITE_URL")).unwrap_or_default();
        let catalog_path = non_empty(lookup("ACTIVITY_CATALOG")).map(PathBuf::from);
        let log_filter = non_empty(lookup("ACTIVITY_LOG"));

        Ok(Self {
            viewer_id,
            site_url,
            catalog_path,
            log_filter,
        })
    }

    /// CLI flag first, then `ACTIVITY_VIEWER_ID`.
    pub fn viewer_id(&self, flag: Option<i64>) -> Result<i64> {
        flag.or(self.viewer_id)
            .ok_or_else(|| anyhow!("viewer id missing; pass --viewer or set ACTIVITY_VIEWER_ID"))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn reads_all_settings() {
        let cfg = config(&[
            ("ACTIVITY_VIEWER_ID", "42"),
            ("ACTIVITY_SITE_URL", "https://bi.example.test"),
            ("ACTIVITY_CATALOG", "/etc/activity/es.json"),
            ("ACTIVITY_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(cfg.viewer_id, Some(42));
        assert_eq!(cfg.site_url, "https://bi.example.test");
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/etc/activity/es.json")));
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_values_are_unset() {
        let cfg = config(&[("ACTIVITY_VIEWER_ID", " "), ("ACTIVITY_CATALOG", "")]).unwrap();
        assert_eq!(cfg.viewer_id, None);
        assert_eq!(cfg.catalog_path, None);
    }

    #[test]
    fn bad_viewer_id_is_rejected() {
        let err = config(&[("ACTIVITY_VIEWER_ID", "ada")]).unwrap_err();
        assert!(err.to_string().contains("ACTIVITY_VIEWER_ID"));
    }

    #[test]
    fn flag_overrides_env_viewer() {
        let cfg = config(&[("ACTIVITY_VIEWER_ID", "42")]).unwrap();
        assert_eq!(cfg.viewer_id(Some(7)).unwrap(), 7);
        assert_eq!(cfg.viewer_id(None).unwrap(), 42);
        assert!(AppConfig::default().viewer_id(None).is_err());
    }
}
