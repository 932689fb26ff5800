use serde::Serialize;

use crate::model::FilterCriteria;

/// Which accessor serves a given set of criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPath {
    /// Native pagination plus a client-side name filter.
    Unfiltered,
    /// Incremental fetch-enrich-filter collection.
    Filtered,
}

/// Pure dispatch on the criteria: type or generation constraints need
/// details the list endpoint does not carry.
pub fn select_path(criteria: &FilterCriteria) -> CatalogPath {
    if criteria.has_attribute_filters() {
        CatalogPath::Filtered
    } else {
        CatalogPath::Unfiltered
    }
}
