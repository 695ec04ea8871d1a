//! Feed state machine: `Idle -> Loading -> {Loaded, Failed}`.
//!
//! A feed instance owns its entries and the avatar color map. Loads are
//! ticketed so a result that arrives after the feed was unmounted (or after a
//! newer mount started) is dropped instead of clobbering the state.

use std::{future::Future, path::PathBuf, sync::Arc};

use anyhow::Context;
use chrono::{DateTime, Utc};
use platform_i18n::{MessageKey, Translator};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    colors::{ColorSlot, UserColorMap},
    describe::{ActivityDescriber, Description, StoryBody},
    entry::{ActivityEntry, Viewer},
    error::FeedError,
    urls::UrlBuilder,
};

/// Source of activity entries, injected by the host.
pub trait ActivityFetcher: Send + Sync {
    fn fetch(&self) -> impl Future<Output = anyhow::Result<Vec<ActivityEntry>>> + Send;
}

/// Reads a JSON array of entries, as returned by the activity API, from disk.
#[derive(Clone, Debug)]
pub struct JsonFileFetcher {
    path: PathBuf,
}

impl JsonFileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ActivityFetcher for JsonFileFetcher {
    async fn fetch(&self) -> anyhow::Result<Vec<ActivityEntry>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let entries = serde_json::from_str(&raw)
            .with_context(|| format!("invalid activity json in {}", self.path.display()))?;
        Ok(entries)
    }
}

#[derive(Debug)]
pub enum FeedState {
    Idle,
    Loading,
    Loaded(Vec<ActivityEntry>),
    Failed(FeedError),
}

/// Proof that a load was started by a particular mount.
#[derive(Debug)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct FeedItem {
    pub id: i64,
    pub color: Option<ColorSlot>,
    pub description: Description,
    pub story: Option<StoryBody>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedView {
    Loading { label: String },
    Failed { code: &'static str, message: String },
    Empty { title: String, hint: String },
    Items { items: Vec<FeedItem> },
}

pub struct ActivityFeed<F> {
    fetcher: F,
    viewer: Viewer,
    i18n: Arc<dyn Translator>,
    urls: Arc<dyn UrlBuilder>,
    state: FeedState,
    colors: UserColorMap,
    generation: u64,
    pending: Option<u64>,
    mounted: bool,
}

impl<F> ActivityFeed<F> {
    pub fn new(
        fetcher: F,
        viewer: Viewer,
        i18n: Arc<dyn Translator>,
        urls: Arc<dyn UrlBuilder>,
    ) -> Self {
        Self {
            fetcher,
            viewer,
            i18n,
            urls,
            state: FeedState::Idle,
            colors: UserColorMap::new(),
            generation: 0,
            pending: None,
            mounted: false,
        }
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn colors(&self) -> &UserColorMap {
        &self.colors
    }

    pub fn entries(&self) -> Option<&[ActivityEntry]> {
        match &self.state {
            FeedState::Loaded(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mounts the feed and, unless entries are already present or a load is
    /// in flight, moves to `Loading` and hands back a ticket for the result.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        self.mounted = true;
        if matches!(self.state, FeedState::Loading | FeedState::Loaded(_)) {
            debug!(generation = self.generation, "activity already present or loading");
            return None;
        }
        self.state = FeedState::Loading;
        self.pending = Some(self.generation);
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: anyhow::Result<Vec<ActivityEntry>>,
    ) -> bool {
        if !self.mounted || self.pending != Some(ticket.generation) {
            warn!(
                ticket = ticket.generation,
                generation = self.generation,
                "discarding stale activity result"
            );
            return false;
        }
        self.pending = None;

        match result {
            Ok(entries) => self.receive_entries(entries),
            Err(err) => {
                let err = FeedError::from_fetch(err);
                warn!(code = err.code(), error = %err, "activity fetch failed");
                self.state = FeedState::Failed(err);
            }
        }
        true
    }

    /// Stores a new batch of entries and extends the color map for it.
    pub fn receive_entries(&mut self, entries: Vec<ActivityEntry>) {
        self.colors = self.colors.assign(&entries, self.viewer.id);
        debug!(
            count = entries.len(),
            colored_users = self.colors.len(),
            "activity entries received"
        );
        self.state = FeedState::Loaded(entries);
    }

    /// Detaches the feed; any outstanding load result will be ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.pending = None;
        if matches!(self.state, FeedState::Loading) {
            self.state = FeedState::Idle;
        }
    }

    pub fn render(&self, now: DateTime<Utc>) -> FeedView {
        match &self.state {
            FeedState::Idle | FeedState::Loading => FeedView::Loading {
                label: self.i18n.text(MessageKey::FeedLoading),
            },
            FeedState::Failed(err) => FeedView::Failed {
                code: err.code(),
                message: self
                    .i18n
                    .translate(MessageKey::FeedError, &[&err.to_string()]),
            },
            FeedState::Loaded(entries) if entries.is_empty() => FeedView::Empty {
                title: self.i18n.text(MessageKey::FeedEmptyTitle),
                hint: self.i18n.text(MessageKey::FeedEmptyHint),
            },
            FeedState::Loaded(entries) => {
                let describer =
                    ActivityDescriber::new(self.i18n.as_ref(), self.urls.as_ref(), now);
                let items = entries
                    .iter()
                    .map(|entry| {
                        let (description, story) = describer.describe(entry, self.viewer);
                        FeedItem {
                            id: entry.id,
                            color: entry.user.as_ref().and_then(|user| self.colors.get(user.id)),
                            description,
                            story,
                        }
                    })
                    .collect();
                FeedView::Items { items }
            }
        }
    }
}

impl<F: ActivityFetcher> ActivityFeed<F> {
    /// Mount-time activation: fetches once when nothing is loaded yet.
    #[instrument(name = "feed.activate", skip_all, fields(viewer = self.viewer.id))]
    pub async fn activate(&mut self) -> bool {
        let Some(ticket) = self.begin_load() else {
            return false;
        };
        let result = self.fetcher.fetch().await;
        self.complete_load(ticket, result)
    }
}
