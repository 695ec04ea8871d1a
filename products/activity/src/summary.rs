//! Header summaries, one builder per topic.

use platform_i18n::MessageKey;

use crate::{
    describe::{Scope, non_blank},
    rich_text::RichText,
};

fn prefixed_target(
    scope: &Scope<'_>,
    key: MessageKey,
    href: Option<String>,
    kind: &str,
) -> RichText {
    RichText::new()
        .text(scope.text(key))
        .target(scope.target_name(), href, &scope.track(kind))
}

/// `<connector><table>`, or nothing when no table snapshot exists.
fn table_clause(scope: &Scope<'_>, summary: RichText, connector: MessageKey) -> RichText {
    match &scope.entry.table {
        Some(table) => summary.text(scope.text(connector)).target(
            table.display_name.clone(),
            table_href(scope),
            &scope.track("Table"),
        ),
        None => summary,
    }
}

/// Like [`table_clause`], closed with the " table" suffix.
fn parent_table(scope: &Scope<'_>, summary: RichText, connector: MessageKey) -> RichText {
    if scope.entry.table.is_none() {
        return summary;
    }
    table_clause(scope, summary, connector).text(scope.text(MessageKey::TableSuffix))
}

fn table_href(scope: &Scope<'_>) -> Option<String> {
    let entry = scope.entry;
    scope.when_exists(|_| {
        Some(
            scope
                .urls
                .table_rows_query(entry.database_id, entry.table_id, None, None),
        )
    })
}

fn metric_href(scope: &Scope<'_>) -> Option<String> {
    let entry = scope.entry;
    scope.when_exists(|id| {
        Some(
            scope
                .urls
                .table_rows_query(entry.database_id, entry.table_id, Some(id), None),
        )
    })
}

fn segment_href(scope: &Scope<'_>) -> Option<String> {
    let entry = scope.entry;
    scope.when_exists(|id| {
        Some(
            scope
                .urls
                .table_rows_query(entry.database_id, entry.table_id, None, Some(id)),
        )
    })
}

pub(crate) fn alert_created(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::AlertCreated, scope.model_link(), "Alert")
}

pub(crate) fn alert_deleted(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::AlertDeleted, scope.model_link(), "Alert")
}

pub(crate) fn card_saved(scope: &Scope<'_>) -> RichText {
    let summary = prefixed_target(scope, MessageKey::QuestionSaved, scope.model_link(), "Card");
    table_clause(scope, summary, MessageKey::QuestionAboutTable)
}

pub(crate) fn card_deleted(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::QuestionDeleted, scope.model_link(), "Card")
}

pub(crate) fn dashboard_created(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::DashboardCreated, scope.model_link(), "Dashboard")
}

pub(crate) fn dashboard_deleted(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::DashboardDeleted, scope.model_link(), "Dashboard")
}

pub(crate) fn dashboard_card_added(scope: &Scope<'_>) -> RichText {
    let href = scope.when_exists(|id| Some(scope.urls.dashboard(id)));
    prefixed_target(scope, MessageKey::DashboardCardAdded, href, "Dashboard")
}

pub(crate) fn dashboard_card_removed(scope: &Scope<'_>) -> RichText {
    let href = scope.when_exists(|id| Some(scope.urls.dashboard(id)));
    prefixed_target(scope, MessageKey::DashboardCardRemoved, href, "Dashboard")
}

/// Early sync events did not record the database name in `details`, so the
/// live database record and then the "unknown" label stand in for it.
pub(crate) fn database_synced(scope: &Scope<'_>) -> RichText {
    let name = scope
        .captured_name()
        .or_else(|| {
            let database = scope.entry.database.as_ref()?;
            non_blank(database.name.as_deref())
        })
        .unwrap_or_else(|| scope.text(MessageKey::UnknownName));
    RichText::new()
        .text(scope.text(MessageKey::DatabaseSynced))
        .name(name)
}

pub(crate) fn installed(scope: &Scope<'_>) -> RichText {
    RichText::new().text(scope.text(MessageKey::InstallSummary))
}

pub(crate) fn metric_created(scope: &Scope<'_>) -> RichText {
    let summary = prefixed_target(scope, MessageKey::MetricCreated, metric_href(scope), "Metric");
    parent_table(scope, summary, MessageKey::TableTo)
}

pub(crate) fn metric_updated(scope: &Scope<'_>) -> RichText {
    let summary = prefixed_target(scope, MessageKey::MetricUpdated, metric_href(scope), "Metric");
    parent_table(scope, summary, MessageKey::TableOf)
}

pub(crate) fn metric_deleted(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::MetricDeleted, metric_href(scope), "Metric")
}

pub(crate) fn pulse_created(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::PulseCreated, scope.model_link(), "Pulse")
}

pub(crate) fn pulse_deleted(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::PulseDeleted, scope.model_link(), "Pulse")
}

pub(crate) fn segment_created(scope: &Scope<'_>) -> RichText {
    let summary =
        prefixed_target(scope, MessageKey::SegmentCreated, segment_href(scope), "Segment");
    parent_table(scope, summary, MessageKey::TableTo)
}

pub(crate) fn segment_updated(scope: &Scope<'_>) -> RichText {
    let summary =
        prefixed_target(scope, MessageKey::SegmentUpdated, segment_href(scope), "Segment");
    parent_table(scope, summary, MessageKey::TableOf)
}

pub(crate) fn segment_deleted(scope: &Scope<'_>) -> RichText {
    prefixed_target(scope, MessageKey::SegmentDeleted, segment_href(scope), "Segment")
}

pub(crate) fn user_joined(scope: &Scope<'_>) -> RichText {
    RichText::new().text(scope.text(MessageKey::UserJoined))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use platform_i18n::Catalog;

    use super::*;
    use crate::{
        entry::{ActivityEntry, TableRef},
        topic::Topic,
        urls::SiteUrls,
    };

    fn metric(model_exists: bool, table: bool) -> ActivityEntry {
        ActivityEntry {
            id: 1,
            topic: Topic::MetricUpdate,
            user_id: None,
            user: None,
            model_exists,
            model: Some("metric".into()),
            model_id: Some(11),
            details: Default::default(),
            table: table.then(|| TableRef {
                display_name: "Orders".into(),
            }),
            database: None,
            database_id: Some(1),
            table_id: Some(4),
            timestamp: Utc::now(),
        }
    }

    fn render(entry: &ActivityEntry, build: fn(&Scope<'_>) -> RichText) -> RichText {
        let catalog = Catalog::english();
        let urls = SiteUrls::default();
        build(&Scope {
            entry,
            i18n: &catalog,
            urls: &urls,
        })
    }

    #[test]
    fn table_clause_is_omitted_without_snapshot() {
        let summary = render(&metric(true, false), metric_updated);
        assert_eq!(summary.plain_text(), "made changes to the metric Unknown");
        assert_eq!(summary.links().count(), 1);
    }

    #[test]
    fn table_is_plain_when_model_is_gone() {
        let summary = render(&metric(false, true), metric_updated);
        assert_eq!(
            summary.plain_text(),
            "made changes to the metric Unknown of the Orders table"
        );
        assert!(!summary.has_links());
    }
}
