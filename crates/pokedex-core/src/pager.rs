// ── Unfiltered accessor ──
//
// Plain offset/limit pagination over the list endpoint, used when no
// type or generation filter is active. Pages accumulate; the name filter
// is applied on read over everything accumulated so far and never
// touches the pagination bookkeeping.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::load::{FetchPhase, LoadOutcome, PhaseCell, SkipReason};
use crate::model::ListEntry;
use crate::model::filter::name_matches;
use crate::source::CatalogSource;

#[derive(Debug, Default)]
struct PagerState {
    entries: Vec<ListEntry>,
    /// Endpoint-reported total; `None` until the first page arrives.
    total: Option<usize>,
    /// Last transport failure, cleared by the next successful page.
    error: Option<CoreError>,
}

impl PagerState {
    fn has_more(&self) -> bool {
        self.total.is_none_or(|total| self.entries.len() < total)
    }
}

/// Unfiltered catalog pagination.
pub struct CatalogPager<S> {
    source: Arc<S>,
    page_size: usize,
    phase: PhaseCell,
    state: Mutex<PagerState>,
}

impl<S: CatalogSource> CatalogPager<S> {
    pub fn new(source: Arc<S>, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            phase: PhaseCell::new(),
            state: Mutex::new(PagerState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, PagerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Snapshots ────────────────────────────────────────────────────

    /// Accumulated entries whose name contains `name` case-insensitively.
    pub fn visible(&self, name: Option<&str>) -> Vec<ListEntry> {
        self.state()
            .entries
            .iter()
            .filter(|entry| name_matches(&entry.name, name))
            .cloned()
            .collect()
    }

    /// Number of entries fetched so far, before name filtering.
    pub fn accumulated(&self) -> usize {
        self.state().entries.len()
    }

    pub fn total(&self) -> Option<usize> {
        self.state().total
    }

    pub fn has_more(&self) -> bool {
        self.state().has_more()
    }

    /// Whether at least one page has arrived.
    pub fn is_started(&self) -> bool {
        self.state().total.is_some()
    }

    pub fn error(&self) -> Option<CoreError> {
        self.state().error.clone()
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase.current()
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<FetchPhase> {
        self.phase.subscribe()
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Fetch the next page at offset = accumulated length.
    ///
    /// A no-op while a fetch is in flight or when everything is loaded.
    /// Failures are kept for [`error()`](Self::error).
    pub async fn load_more(&self) -> LoadOutcome {
        if !self.has_more() {
            debug!("catalog fully loaded");
            return LoadOutcome::Skipped(SkipReason::Exhausted);
        }
        let Some(_guard) = self.phase.try_begin() else {
            debug!("page fetch already in flight");
            return LoadOutcome::Skipped(SkipReason::InFlight);
        };

        let offset = self.accumulated();

        debug!(offset, limit = self.page_size, "fetching catalog page");
        let result = self.source.list_page(self.page_size, offset).await;

        let mut state = self.state();
        match result {
            Ok(page) => {
                let received = page.entries.len();
                state.entries.extend(page.entries);
                // An empty page ends the walk even if the reported total
                // says otherwise.
                state.total = Some(if received == 0 {
                    state.entries.len()
                } else {
                    page.total
                });
                state.error = None;
                let has_more = state.has_more();
                info!(
                    received,
                    accumulated = state.entries.len(),
                    total = page.total,
                    has_more,
                    "catalog page loaded"
                );
                LoadOutcome::Loaded {
                    added: received,
                    offset: state.entries.len(),
                    has_more,
                }
            }
            Err(e) => {
                warn!(error = %e, offset, "catalog page fetch failed");
                state.error = Some(e);
                LoadOutcome::Failed
            }
        }
    }
}
