// ── Catalog facade ──
//
// What a rendering layer talks to. Holds both accessors side by side and
// routes every call through `select_path` on the current criteria. The
// two paths never share cursor or results.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::collector::FilteredCatalog;
use crate::config::CatalogConfig;
use crate::error::CoreError;
use crate::load::{FetchPhase, LoadOutcome, SkipReason};
use crate::model::{Card, FilterCriteria};
use crate::pager::CatalogPager;
use crate::selector::{CatalogPath, select_path};
use crate::source::CatalogSource;

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub path: CatalogPath,
    pub entries: Vec<Card>,
    pub loading: bool,
    /// Only the unfiltered path surfaces errors; the filtered path logs
    /// and degrades instead.
    pub error: Option<CoreError>,
    pub has_more: bool,
}

/// One browsing session over the catalog.
pub struct Catalog<S> {
    criteria: Mutex<FilterCriteria>,
    pager: CatalogPager<S>,
    filtered: FilteredCatalog<S>,
}

impl<S: CatalogSource> Catalog<S> {
    pub fn new(source: S, config: CatalogConfig) -> Self {
        Self::from_shared(Arc::new(source), config)
    }

    pub fn from_shared(source: Arc<S>, config: CatalogConfig) -> Self {
        Self {
            criteria: Mutex::new(FilterCriteria::default()),
            pager: CatalogPager::new(Arc::clone(&source), config.page_size),
            filtered: FilteredCatalog::new(source, config),
        }
    }

    fn criteria_lock(&self) -> MutexGuard<'_, FilterCriteria> {
        self.criteria.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.criteria_lock().clone()
    }

    pub fn path(&self) -> CatalogPath {
        select_path(&self.criteria_lock())
    }

    pub fn pager(&self) -> &CatalogPager<S> {
        &self.pager
    }

    pub fn filtered(&self) -> &FilteredCatalog<S> {
        &self.filtered
    }

    // ── Triggers ─────────────────────────────────────────────────────

    /// Apply new criteria.
    ///
    /// Entering or staying on the filtered path with different criteria
    /// starts a fresh filtered session from offset 0. On the unfiltered
    /// path only the first page is ever fetched here; later name changes
    /// just re-filter what is held.
    pub async fn on_filter_change(&self, criteria: FilterCriteria) -> LoadOutcome {
        let criteria = criteria.normalized();
        {
            let mut current = self.criteria_lock();
            if *current == criteria {
                debug!("criteria unchanged");
                return LoadOutcome::Skipped(SkipReason::Unchanged);
            }
            current.clone_from(&criteria);
        }

        let path = select_path(&criteria);
        info!(?path, criteria = ?criteria, "criteria changed");
        match path {
            CatalogPath::Filtered => {
                self.filtered.reset(criteria);
                self.filtered.load_more().await
            }
            CatalogPath::Unfiltered if self.pager.is_started() => LoadOutcome::Refiltered,
            CatalogPath::Unfiltered => self.pager.load_more().await,
        }
    }

    /// Drop every filter.
    pub async fn on_clear(&self) -> LoadOutcome {
        self.on_filter_change(FilterCriteria::default()).await
    }

    /// Fetch more on whichever path the current criteria select.
    pub async fn load_more(&self) -> LoadOutcome {
        match self.path() {
            CatalogPath::Filtered => self.filtered.load_more().await,
            CatalogPath::Unfiltered => self.pager.load_more().await,
        }
    }

    // ── View ─────────────────────────────────────────────────────────

    pub fn view(&self) -> CatalogView {
        let criteria = self.criteria();
        let path = select_path(&criteria);
        match path {
            CatalogPath::Filtered => CatalogView {
                path,
                entries: self.filtered.results().iter().map(Card::from).collect(),
                loading: self.filtered.phase() == FetchPhase::Fetching,
                error: None,
                has_more: self.filtered.cursor().has_more,
            },
            CatalogPath::Unfiltered => CatalogView {
                path,
                entries: self
                    .pager
                    .visible(criteria.name_filter())
                    .iter()
                    .map(Card::from)
                    .collect(),
                loading: self.pager.phase() == FetchPhase::Fetching,
                error: self.pager.error(),
                has_more: self.pager.has_more(),
            },
        }
    }
}
