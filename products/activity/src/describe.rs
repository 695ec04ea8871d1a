//! Turns raw activity entries into display descriptions.
//!
//! Each known [`Topic`] maps to a pair of pure builder functions (one for the
//! header summary, one for the story body). Topics missing from the table get
//! the generic summary and no story.

use chrono::{DateTime, Utc};
use platform_i18n::{MessageKey, Translator};
use serde::Serialize;
use tracing::trace;

use crate::{
    entry::{ActivityEntry, Viewer},
    rich_text::RichText,
    story, summary,
    time::time_since,
    topic::Topic,
    urls::UrlBuilder,
};

/// Header line of a feed item.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Description {
    pub user_name: String,
    pub summary: RichText,
    pub time_since: String,
}

/// Secondary text under the header.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StoryBody {
    pub topic: Topic,
    pub body: Option<String>,
    pub body_link: Option<String>,
}

pub(crate) type SummaryFn = fn(&Scope<'_>) -> RichText;
pub(crate) type StoryFn = fn(&Scope<'_>) -> StoryBody;

/// Builders for a topic; `None` for topics without a dedicated rendering.
pub(crate) fn builders(topic: &Topic) -> Option<(SummaryFn, StoryFn)> {
    let pair: (SummaryFn, StoryFn) = match topic {
        Topic::AlertCreate => (summary::alert_created, story::empty),
        Topic::AlertDelete => (summary::alert_deleted, story::empty),
        Topic::CardCreate | Topic::CardUpdate => (summary::card_saved, story::linked_name),
        Topic::CardDelete => (summary::card_deleted, story::name_only),
        Topic::DashboardCreate => (summary::dashboard_created, story::linked_name),
        Topic::DashboardDelete => (summary::dashboard_deleted, story::name_only),
        Topic::DashboardAddCards => (summary::dashboard_card_added, story::first_dashcard),
        Topic::DashboardRemoveCards => (summary::dashboard_card_removed, story::first_dashcard),
        Topic::DatabaseSync => (summary::database_synced, story::empty),
        Topic::Install => (summary::installed, story::empty),
        Topic::MetricCreate => (summary::metric_created, story::description),
        Topic::MetricUpdate => (summary::metric_updated, story::revision_message),
        Topic::MetricDelete => (summary::metric_deleted, story::revision_message),
        Topic::PulseCreate => (summary::pulse_created, story::linked_name),
        Topic::PulseDelete => (summary::pulse_deleted, story::name_only),
        Topic::SegmentCreate => (summary::segment_created, story::description),
        Topic::SegmentUpdate => (summary::segment_updated, story::revision_message),
        Topic::SegmentDelete => (summary::segment_deleted, story::revision_message),
        Topic::UserJoined => (summary::user_joined, story::empty),
        Topic::Other(_) => return None,
    };
    Some(pair)
}

pub(crate) fn non_blank(name: Option<&str>) -> Option<String> {
    name.filter(|name| !name.trim().is_empty()).map(str::to_string)
}

/// Everything a builder may look at for one entry.
pub(crate) struct Scope<'a> {
    pub entry: &'a ActivityEntry,
    pub i18n: &'a dyn Translator,
    pub urls: &'a dyn UrlBuilder,
}

impl Scope<'_> {
    pub fn text(&self, key: MessageKey) -> String {
        self.i18n.text(key)
    }

    /// Name captured at event time, if it is not blank.
    pub fn captured_name(&self) -> Option<String> {
        non_blank(self.entry.details.name.as_deref())
    }

    /// [`Scope::captured_name`], or the "unknown" label.
    pub fn target_name(&self) -> String {
        self.captured_name()
            .unwrap_or_else(|| self.text(MessageKey::UnknownName))
    }

    /// `href` only while the referenced model still exists.
    pub fn when_exists(&self, build: impl FnOnce(i64) -> Option<String>) -> Option<String> {
        if !self.entry.model_exists {
            return None;
        }
        self.entry.model_id.and_then(build)
    }

    pub fn model_link(&self) -> Option<String> {
        self.when_exists(|id| {
            let model = self.entry.model.as_deref()?;
            self.urls.model_to_url(model, id)
        })
    }

    pub fn track(&self, kind: &str) -> String {
        format!("Activity Feed;Header Clicked;{kind} -> {}", self.entry.topic)
    }

    pub fn empty_story(&self) -> StoryBody {
        StoryBody {
            topic: self.entry.topic.clone(),
            body: None,
            body_link: None,
        }
    }
}

/// Stateless describer bound to a locale, a router and a reference instant.
pub struct ActivityDescriber<'a> {
    i18n: &'a dyn Translator,
    urls: &'a dyn UrlBuilder,
    now: DateTime<Utc>,
}

impl<'a> ActivityDescriber<'a> {
    pub fn new(i18n: &'a dyn Translator, urls: &'a dyn UrlBuilder, now: DateTime<Utc>) -> Self {
        Self { i18n, urls, now }
    }

    pub fn describe(
        &self,
        entry: &ActivityEntry,
        viewer: Viewer,
    ) -> (Description, Option<StoryBody>) {
        let scope = Scope {
            entry,
            i18n: self.i18n,
            urls: self.urls,
        };
        let mut description = Description {
            user_name: self.user_name(entry, viewer),
            summary: RichText::new().text(self.i18n.text(MessageKey::GenericSummary)),
            time_since: time_since(self.i18n, entry.timestamp, self.now),
        };

        let story = match builders(&entry.topic) {
            Some((summary, story)) => {
                description.summary = summary(&scope);
                Some(story(&scope))
            }
            None => {
                trace!(id = entry.id, topic = %entry.topic, "no renderer for topic");
                None
            }
        };

        if entry.topic == Topic::Install {
            description.user_name = self.i18n.text(MessageKey::InstallUser);
        }

        (description, story)
    }

    fn user_name(&self, entry: &ActivityEntry, viewer: Viewer) -> String {
        match &entry.user {
            Some(user) if user.id == viewer.id => self.i18n.text(MessageKey::You),
            Some(user) => non_blank(user.first_name.as_deref())
                .unwrap_or_else(|| self.i18n.text(MessageKey::UnknownName)),
            None => self.i18n.text(MessageKey::SystemUser),
        }
    }
}
