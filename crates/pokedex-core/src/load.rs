// ── Fetch-cycle state machine ──
//
// At most one fetch cycle runs per path. Entry is an atomic
// Idle → Fetching transition on a `watch` channel; the returned guard
// flips it back to Idle when dropped, on every exit path.

use tokio::sync::watch;

/// Whether a fetch cycle is currently running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching,
}

/// Result of a `load_more` / filter-change trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A fetch cycle ran and its results were committed.
    Loaded {
        /// Entries added to the accumulated results.
        added: usize,
        /// Cursor offset after the cycle.
        offset: usize,
        has_more: bool,
    },
    /// No fetch was attempted.
    Skipped(SkipReason),
    /// The cycle failed; state is as it was before the trigger.
    Failed,
    /// Nothing to fetch; the view is recomputed from what is already held.
    Refiltered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another cycle is in flight.
    InFlight,
    /// The endpoint has nothing further.
    Exhausted,
    /// The criteria equal the active ones.
    Unchanged,
}

/// Owner of one path's [`FetchPhase`].
#[derive(Debug)]
pub(crate) struct PhaseCell {
    tx: watch::Sender<FetchPhase>,
}

impl PhaseCell {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(FetchPhase::Idle);
        Self { tx }
    }

    /// Enter `Fetching` if currently `Idle`.
    pub(crate) fn try_begin(&self) -> Option<FetchGuard<'_>> {
        let acquired = self.tx.send_if_modified(|phase| match phase {
            FetchPhase::Idle => {
                *phase = FetchPhase::Fetching;
                true
            }
            FetchPhase::Fetching => false,
        });
        acquired.then_some(FetchGuard { tx: &self.tx })
    }

    pub(crate) fn current(&self) -> FetchPhase {
        *self.tx.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<FetchPhase> {
        self.tx.subscribe()
    }
}

/// Scoped `Fetching` state; returns the cell to `Idle` on drop.
#[must_use = "the fetch cycle ends when the guard is dropped"]
pub(crate) struct FetchGuard<'a> {
    tx: &'a watch::Sender<FetchPhase>,
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.tx.send_replace(FetchPhase::Idle);
    }
}
