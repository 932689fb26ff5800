// ── Runtime tuning ──
//
// Knobs for the fetch-and-filter loop. Built by the config crate or the
// CLI and handed in; core never reads config files.

/// Tuning for a [`Catalog`](crate::Catalog) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Matches collected per filtered `load_more` invocation.
    pub limit: usize,
    /// Entries requested per list page on the filtered path.
    pub batch_size: usize,
    /// List pages consulted per filtered invocation.
    pub max_batches: usize,
    /// Detail lookups allowed in flight at once.
    pub parallel_requests: usize,
    /// Entries requested per page on the unfiltered path.
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            batch_size: 50,
            max_batches: 3,
            parallel_requests: 10,
            page_size: 20,
        }
    }
}
