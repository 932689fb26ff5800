use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::model::DetailRecord;

/// Memoized detail lookups, keyed by the name that was requested.
///
/// Uses `DashMap` so the lookups of one fetch chunk can populate it
/// concurrently through `&self`. The first write for a name wins and is
/// never replaced; there is no eviction.
#[derive(Debug, Default)]
pub struct DetailCache {
    by_name: DashMap<String, DetailRecord>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached record for `name`, if any.
    pub fn get(&self, name: &str) -> Option<DetailRecord> {
        self.by_name.get(name).map(|r| r.value().clone())
    }

    /// Store `record` under `name` unless already present.
    ///
    /// Returns the record that is cached after the call, which is the
    /// earlier one if `name` was already known.
    pub fn put(&self, name: &str, record: DetailRecord) -> DetailRecord {
        match self.by_name.entry(name.to_owned()) {
            Entry::Occupied(existing) => existing.get().clone(),
            Entry::Vacant(slot) => slot.insert(record).value().clone(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
