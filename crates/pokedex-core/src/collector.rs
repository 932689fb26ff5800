// ── Incremental collector ──
//
// Filtered path of the catalog. The list endpoint cannot filter, so each
// `load_more` walks up to `max_batches` list pages from the cursor,
// enriches entries not yet classified in this session, and keeps the ones
// matching the active criteria until `limit` matches are collected.
//
// Session state (criteria, results, cursor, seen set) sits behind one
// mutex that is never held across an await. A cycle works on a private
// copy of the seen set and commits everything in one step, so a reset
// that lands mid-cycle is detected by epoch and the cycle's output is
// dropped instead of leaking into the new session.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

use crate::config::CatalogConfig;
use crate::error::CoreError;
use crate::fetch::fetch_details;
use crate::load::{FetchPhase, LoadOutcome, PhaseCell, SkipReason};
use crate::model::{DetailRecord, FilterCriteria};
use crate::source::CatalogSource;
use crate::store::{DetailCache, SeenSet};

/// Position in the list endpoint for the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: usize,
    pub has_more: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            offset: 0,
            has_more: true,
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    /// Bumped on every reset; a cycle only commits into the epoch it
    /// started in.
    epoch: u64,
    criteria: FilterCriteria,
    results: Vec<DetailRecord>,
    cursor: Cursor,
    seen: SeenSet,
}

/// Output of one cycle, not yet applied to the session.
struct Collected {
    records: Vec<DetailRecord>,
    newly_seen: Vec<String>,
    offset: usize,
    total: usize,
    exhausted: bool,
    batches: usize,
}

/// Filtered catalog session: detail cache, seen set, accumulated matches
/// and cursor, owned together.
pub struct FilteredCatalog<S> {
    source: Arc<S>,
    config: CatalogConfig,
    cache: DetailCache,
    phase: PhaseCell,
    session: Mutex<Session>,
}

impl<S: CatalogSource> FilteredCatalog<S> {
    pub fn new(source: Arc<S>, config: CatalogConfig) -> Self {
        Self {
            source,
            config,
            cache: DetailCache::new(),
            phase: PhaseCell::new(),
            session: Mutex::new(Session::default()),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Snapshots ────────────────────────────────────────────────────

    pub fn criteria(&self) -> FilterCriteria {
        self.session().criteria.clone()
    }

    /// Accumulated matches in discovery order.
    pub fn results(&self) -> Vec<DetailRecord> {
        self.session().results.clone()
    }

    pub fn cursor(&self) -> Cursor {
        self.session().cursor
    }

    pub fn seen_count(&self) -> usize {
        self.session().seen.len()
    }

    pub fn has_seen(&self, name: &str) -> bool {
        self.session().seen.contains(name)
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase.current()
    }

    /// Observe `Idle`/`Fetching` transitions (the view's loading flag).
    pub fn subscribe_phase(&self) -> watch::Receiver<FetchPhase> {
        self.phase.subscribe()
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Start a new session under `criteria`.
    ///
    /// Clears results, cursor and seen set together. The detail cache is
    /// kept: details do not depend on criteria.
    pub fn reset(&self, criteria: FilterCriteria) {
        let mut session = self.session();
        session.epoch += 1;
        session.criteria = criteria;
        session.results.clear();
        session.cursor = Cursor::default();
        session.seen.clear();
        info!(epoch = session.epoch, criteria = ?session.criteria, "filter session reset");
    }

    /// Run one collection cycle from the current cursor.
    ///
    /// A no-op while another cycle is in flight or once the endpoint is
    /// exhausted. Failures are logged and leave the session untouched.
    pub async fn load_more(&self) -> LoadOutcome {
        if !self.cursor().has_more {
            debug!("filtered catalog exhausted");
            return LoadOutcome::Skipped(SkipReason::Exhausted);
        }
        let Some(_guard) = self.phase.try_begin() else {
            debug!("filtered fetch already in flight");
            return LoadOutcome::Skipped(SkipReason::InFlight);
        };

        // Re-runs only when the session was reset while a cycle was in
        // flight; the new session gets its first cycle here.
        loop {
            let (epoch, start, criteria, known) = {
                let session = self.session();
                if !session.cursor.has_more {
                    return LoadOutcome::Skipped(SkipReason::Exhausted);
                }
                let known: HashSet<String> = session.seen.iter().map(str::to_owned).collect();
                (
                    session.epoch,
                    session.cursor.offset,
                    session.criteria.clone(),
                    known,
                )
            };

            debug!(epoch, start_offset = start, "collecting filtered entries");
            let result = self.collect(start, &criteria, known).await;
            if let Some(outcome) = self.commit(epoch, start, result) {
                return outcome;
            }
        }
    }

    // ── Cycle internals ──────────────────────────────────────────────

    async fn collect(
        &self,
        start: usize,
        criteria: &FilterCriteria,
        mut known: HashSet<String>,
    ) -> Result<Collected, CoreError> {
        let CatalogConfig {
            limit,
            batch_size,
            max_batches,
            parallel_requests,
            ..
        } = self.config;

        let mut records: Vec<DetailRecord> = Vec::new();
        let mut newly_seen = Vec::new();
        let mut batches = 0;
        let mut offset = start;
        let mut total = 0;
        let mut exhausted = false;

        while records.len() < limit && batches < max_batches {
            debug!(batch = batches + 1, offset, "fetching list page");
            let page = self.source.list_page(batch_size, offset).await?;
            batches += 1;
            total = page.total;

            if page.entries.is_empty() {
                debug!(offset, "list page empty; input exhausted");
                exhausted = true;
                break;
            }

            // `insert` also drops names repeated within the page.
            let unseen: Vec<String> = page
                .entries
                .into_iter()
                .map(|entry| entry.name)
                .filter(|name| known.insert(name.clone()))
                .collect();

            if unseen.is_empty() {
                debug!(offset, "every entry in page already seen");
                offset += batch_size;
                continue;
            }

            let details =
                fetch_details(self.source.as_ref(), &self.cache, &unseen, parallel_requests).await;

            // Past `limit` the rest of the batch is still marked seen.
            for (name, detail) in unseen.into_iter().zip(details) {
                if let Some(record) =
                    detail.filter(|r| records.len() < limit && criteria.matches(r))
                {
                    trace!(name = %record.name, collected = records.len() + 1, limit, "match");
                    records.push(record);
                }
                newly_seen.push(name);
            }

            offset += batch_size;

            if offset >= total {
                debug!(offset, total, "reached end of catalog");
                break;
            }
        }

        Ok(Collected {
            records,
            newly_seen,
            offset,
            total,
            exhausted,
            batches,
        })
    }

    /// Apply a finished cycle. `None` means the session moved on while the
    /// cycle ran and its output was discarded.
    fn commit(
        &self,
        epoch: u64,
        start: usize,
        result: Result<Collected, CoreError>,
    ) -> Option<LoadOutcome> {
        let mut session = self.session();
        if session.epoch != epoch {
            debug!(
                cycle_epoch = epoch,
                current_epoch = session.epoch,
                "criteria changed during fetch; discarding cycle"
            );
            return None;
        }

        match result {
            Ok(batch) => {
                let added = batch.records.len();
                let has_more = !batch.exhausted && batch.offset < batch.total;
                session.seen.extend(batch.newly_seen);
                session.results.extend(batch.records);
                session.cursor = Cursor {
                    offset: batch.offset,
                    has_more,
                };
                info!(
                    added,
                    accumulated = session.results.len(),
                    offset = batch.offset,
                    total = batch.total,
                    batches = batch.batches,
                    has_more,
                    "filtered cycle complete"
                );
                Some(LoadOutcome::Loaded {
                    added,
                    offset: batch.offset,
                    has_more,
                })
            }
            Err(e) => {
                warn!(error = %e, offset = start, "page fetch failed; cursor left unchanged");
                Some(LoadOutcome::Failed)
            }
        }
    }
}
