use url::form_urlencoded;

/// Maps domain objects to in-app paths.
pub trait UrlBuilder: Send + Sync {
    fn question(&self, card_id: i64) -> String;

    fn dashboard(&self, dashboard_id: i64) -> String;

    fn pulse(&self, pulse_id: i64) -> String;

    /// Ad-hoc query over a table, optionally scoped to a metric or segment.
    fn table_rows_query(
        &self,
        database_id: Option<i64>,
        table_id: Option<i64>,
        metric_id: Option<i64>,
        segment_id: Option<i64>,
    ) -> String;

    /// `None` for models without a page of their own. Alerts are logged under
    /// their card (`model = "card"`), so there is no `"alert"` route; tables
    /// are reached through [`UrlBuilder::table_rows_query`].
    fn model_to_url(&self, model: &str, model_id: i64) -> Option<String> {
        match model {
            "card" => Some(self.question(model_id)),
            "dashboard" => Some(self.dashboard(model_id)),
            "pulse" => Some(self.pulse(model_id)),
            _ => None,
        }
    }
}

/// Default routes, optionally mounted under a site prefix.
#[derive(Clone, Debug, Default)]
pub struct SiteUrls {
    prefix: String,
}

impl SiteUrls {
    pub fn new(site_url: impl Into<String>) -> Self {
        let prefix = site_url.into().trim_end_matches('/').to_string();
        Self { prefix }
    }

    fn path(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }
}

impl UrlBuilder for SiteUrls {
    fn question(&self, card_id: i64) -> String {
        self.path(&format!("/question/{card_id}"))
    }

    fn dashboard(&self, dashboard_id: i64) -> String {
        self.path(&format!("/dashboard/{dashboard_id}"))
    }

    fn pulse(&self, pulse_id: i64) -> String {
        self.path(&format!("/pulse/{pulse_id}"))
    }

    fn table_rows_query(
        &self,
        database_id: Option<i64>,
        table_id: Option<i64>,
        metric_id: Option<i64>,
        segment_id: Option<i64>,
    ) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let params = [
            ("db", database_id),
            ("table", table_id),
            ("metric", metric_id),
            ("segment", segment_id),
        ];
        for (name, value) in params {
            if let Some(value) = value {
                query.append_pair(name, &value.to_string());
            }
        }
        let query = query.finish();
        if query.is_empty() {
            self.path("/question")
        } else {
            self.path(&format!("/question?{query}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_with_pages_resolve() {
        let urls = SiteUrls::default();
        assert_eq!(urls.model_to_url("card", 7).as_deref(), Some("/question/7"));
        assert_eq!(
            urls.model_to_url("dashboard", 2).as_deref(),
            Some("/dashboard/2")
        );
        assert_eq!(urls.model_to_url("pulse", 5).as_deref(), Some("/pulse/5"));
        assert_eq!(urls.model_to_url("segment", 5), None);
        assert_eq!(urls.model_to_url("alert", 5), None);
        assert_eq!(urls.model_to_url("table", 5), None);
    }

    #[test]
    fn table_query_skips_missing_ids() {
        let urls = SiteUrls::default();
        assert_eq!(
            urls.table_rows_query(Some(1), Some(2), None, Some(4)),
            "/question?db=1&table=2&segment=4"
        );
        assert_eq!(urls.table_rows_query(None, None, None, None), "/question");
    }

    #[test]
    fn site_prefix_is_normalized() {
        let urls = SiteUrls::new("https://bi.example.test/");
        assert_eq!(urls.question(3), "https://bi.example.test/question/3");
    }
}
