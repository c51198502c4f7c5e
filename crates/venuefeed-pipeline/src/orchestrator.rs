//! Pipeline orchestration.
//!
//! [`Pipeline`] owns the in-memory venue list, the status mapping, and the
//! last user position, and is the only writer of each. Every change runs
//! enrichment again and publishes a fresh [`ViewModel`] through a
//! `tokio::sync::watch` channel.
//!
//! The feed request runs without holding the state lock, so toggles and
//! position updates that arrive mid-fetch are applied straight away and are
//! folded into the enrichment that runs when the fetch completes.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{watch, Mutex};
use venuefeed_core::{Position, RawVenue, StatusMap, Venue, VenueStatus};
use venuefeed_feed::FailureKind;
use venuefeed_store::{CacheStore, StatusStore};

use crate::enrich::rank_venues;
use crate::location::LocationSource;
use crate::source::VenueSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing requested yet.
    Idle,
    /// A feed request is outstanding.
    Fetching,
    /// The list came from a successful feed request.
    Ready,
    /// The feed request failed; the list came from the cache or is empty.
    Degraded,
}

/// Why a degraded view model looks the way it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The feed failed and the last cached snapshot is being shown.
    ServedFromCache { cause: FailureKind },
    /// The feed failed and there is no cached snapshot.
    NoDataAvailable { cause: FailureKind },
}

/// What presentation renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub state: PipelineState,
    pub condition: Option<Condition>,
    pub venues: Vec<Venue>,
}

impl ViewModel {
    fn initial() -> Self {
        Self {
            state: PipelineState::Idle,
            condition: None,
            venues: Vec::new(),
        }
    }
}

struct Inner {
    state: PipelineState,
    condition: Option<Condition>,
    raw: Vec<RawVenue>,
    statuses: StatusMap,
    position: Option<Position>,
}

pub struct Pipeline<S> {
    source: S,
    cache: CacheStore,
    status_store: StatusStore,
    inner: Mutex<Inner>,
    published: watch::Sender<Arc<ViewModel>>,
}

impl<S: VenueSource> Pipeline<S> {
    /// Build a pipeline. The persisted status mapping is read once here;
    /// afterwards the in-memory copy is authoritative for the session and is
    /// written through on every toggle.
    #[must_use]
    pub fn new(source: S, cache: CacheStore, status_store: StatusStore) -> Self {
        let statuses = status_store.load_all();
        tracing::debug!(count = statuses.len(), "loaded venue statuses");

        let (published, _) = watch::channel(Arc::new(ViewModel::initial()));

        Self {
            source,
            cache,
            status_store,
            inner: Mutex::new(Inner {
                state: PipelineState::Idle,
                condition: None,
                raw: Vec::new(),
                statuses,
                position: None,
            }),
            published,
        }
    }

    /// Fetch the feed, falling back to the cache on any failure, then
    /// enrich and publish.
    ///
    /// Never fails: a fetch error produces a [`PipelineState::Degraded`] view
    /// model carrying a [`Condition`]. Overlapping calls are allowed and the
    /// last one to finish wins.
    pub async fn load(&self) -> Arc<ViewModel> {
        {
            let mut inner = self.inner.lock().await;
            inner.state = PipelineState::Fetching;
            self.publish(&inner);
        }

        let (raw, state, condition) = match self.source.fetch_venues().await {
            Ok(venues) => {
                tracing::info!(count = venues.len(), "venue feed fetched");
                self.save_cache(venues.clone()).await;
                (venues, PipelineState::Ready, None)
            }
            Err(e) => {
                let cause = e.kind();
                tracing::warn!(error = %e, kind = %cause, "venue feed fetch failed; falling back to cache");
                match self.load_cache().await {
                    Some(venues) => {
                        tracing::info!(count = venues.len(), "serving venues from cache");
                        (
                            venues,
                            PipelineState::Degraded,
                            Some(Condition::ServedFromCache { cause }),
                        )
                    }
                    None => {
                        tracing::warn!("no cached venues available");
                        (
                            Vec::new(),
                            PipelineState::Degraded,
                            Some(Condition::NoDataAvailable { cause }),
                        )
                    }
                }
            }
        };

        let mut inner = self.inner.lock().await;
        inner.raw = raw;
        inner.state = state;
        inner.condition = condition;
        self.publish(&inner)
    }

    /// Advance `venue_name` one step through normal → favorite → disliked →
    /// normal, persist the mapping, and republish.
    ///
    /// The name does not have to be in the current list: a toggle that lands
    /// before the first fetch completes is kept and applied once venues
    /// arrive. A failed write is logged; the new status still holds for this
    /// session.
    pub async fn toggle_status(&self, venue_name: &str) -> VenueStatus {
        let mut inner = self.inner.lock().await;

        let next = inner
            .statuses
            .get(venue_name)
            .copied()
            .unwrap_or_default()
            .next();
        inner.statuses.insert(venue_name.to_owned(), next);
        tracing::info!(venue = venue_name, status = %next, "venue status toggled");

        // Persist while still holding the lock so writes land in toggle order.
        let snapshot = inner.statuses.clone();
        let store = self.status_store.clone();
        match tokio::task::spawn_blocking(move || store.save_all(&snapshot)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(venue = venue_name, error = %e, "failed to persist venue status");
            }
            Err(e) => {
                tracing::warn!(venue = venue_name, error = %e, "venue status write task failed");
            }
        }

        self.publish(&inner);
        next
    }

    /// Record a new user position and re-rank without refetching.
    ///
    /// Non-finite positions are ignored.
    pub async fn update_position(&self, position: Position) {
        if !position.latitude.is_finite() || !position.longitude.is_finite() {
            tracing::warn!(?position, "ignoring non-finite user position");
            return;
        }

        let mut inner = self.inner.lock().await;
        inner.position = Some(position);
        self.publish(&inner);
    }

    /// Apply every position from `locations` until the stream ends.
    pub async fn track_location<L: LocationSource>(&self, mut locations: L) {
        while let Some(position) = locations.next().await {
            self.update_position(position).await;
        }
        tracing::debug!("location source finished");
    }

    /// The most recently published view model.
    #[must_use]
    pub fn current_view_model(&self) -> Arc<ViewModel> {
        Arc::clone(&self.published.borrow())
    }

    /// Receive every view model published from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewModel>> {
        self.published.subscribe()
    }

    /// Look up a venue in the current view model for detail display.
    #[must_use]
    pub fn selected_venue(&self, name: &str) -> Option<Venue> {
        self.published
            .borrow()
            .venues
            .iter()
            .find(|v| v.name == name)
            .cloned()
    }

    #[must_use]
    pub fn state(&self) -> PipelineState {
        self.published.borrow().state
    }

    fn publish(&self, inner: &Inner) -> Arc<ViewModel> {
        let view_model = Arc::new(ViewModel {
            state: inner.state,
            condition: inner.condition,
            venues: rank_venues(&inner.raw, &inner.statuses, inner.position),
        });
        self.published.send_replace(Arc::clone(&view_model));
        view_model
    }

    async fn save_cache(&self, venues: Vec<RawVenue>) {
        let cache = self.cache.clone();
        match tokio::task::spawn_blocking(move || cache.save(&venues)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "failed to save venue cache"),
            Err(e) => tracing::warn!(error = %e, "venue cache write task failed"),
        }
    }

    async fn load_cache(&self) -> Option<Vec<RawVenue>> {
        let cache = self.cache.clone();
        match tokio::task::spawn_blocking(move || cache.load()).await {
            Ok(venues) => venues,
            Err(e) => {
                tracing::warn!(error = %e, "venue cache read task failed");
                None
            }
        }
    }
}
