// In-memory `CatalogSource` double shared by the integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use pokedex_core::{CatalogSource, CoreError, DetailRecord, ListEntry, ListPage, generation_for_id};

struct MockEntry {
    name: String,
    types: Vec<String>,
    id: u32,
}

/// A stable, fully in-memory catalog with call recording and fault
/// injection.
pub struct MockCatalog {
    entries: Vec<MockEntry>,
    yields: usize,
    failing_details: Mutex<HashSet<String>>,
    failing_offsets: Mutex<HashSet<usize>>,
    list_calls: Mutex<Vec<(usize, usize)>>,
    detail_calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockCatalog {
    /// `count` entries named `mon-000`, `mon-001`, … of type `normal`,
    /// species ids starting at 1.
    pub fn with_count(count: usize) -> Self {
        let entries = (0..count)
            .map(|i| MockEntry {
                name: format!("mon-{i:03}"),
                types: vec!["normal".into()],
                id: u32::try_from(i + 1).unwrap(),
            })
            .collect();
        Self {
            entries,
            yields: 1,
            failing_details: Mutex::new(HashSet::new()),
            failing_offsets: Mutex::new(HashSet::new()),
            list_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Named entries, in order, all of type `normal`.
    pub fn with_names(names: &[&str]) -> Self {
        let mut catalog = Self::with_count(names.len());
        for (entry, name) in catalog.entries.iter_mut().zip(names) {
            entry.name = (*name).to_string();
        }
        catalog
    }

    pub fn typed(mut self, index: usize, types: &[&str]) -> Self {
        self.entries[index].types = types.iter().map(ToString::to_string).collect();
        self
    }

    pub fn named(mut self, index: usize, name: &str) -> Self {
        self.entries[index].name = name.into();
        self
    }

    pub fn species_id(mut self, index: usize, id: u32) -> Self {
        self.entries[index].id = id;
        self
    }

    /// How many times each call yields to the scheduler before answering.
    pub fn yielding(mut self, yields: usize) -> Self {
        self.yields = yields;
        self
    }

    pub fn fail_detail(&self, name: &str) {
        self.failing_details.lock().unwrap().insert(name.into());
    }

    pub fn fail_offset(&self, offset: usize) {
        self.failing_offsets.lock().unwrap().insert(offset);
    }

    pub fn heal_offset(&self, offset: usize) {
        self.failing_offsets.lock().unwrap().remove(&offset);
    }

    pub fn list_calls(&self) -> Vec<(usize, usize)> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn list_offsets(&self) -> Vec<usize> {
        self.list_calls().into_iter().map(|(_, offset)| offset).collect()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        for _ in 0..self.yields {
            tokio::task::yield_now().await;
        }
    }
}

impl CatalogSource for MockCatalog {
    async fn list_page(&self, limit: usize, offset: usize) -> Result<ListPage, CoreError> {
        self.list_calls.lock().unwrap().push((limit, offset));
        self.pause().await;

        let failing = self.failing_offsets.lock().unwrap().contains(&offset);
        if failing {
            return Err(CoreError::Api {
                message: format!("list page at {offset} failed"),
                status: Some(500),
            });
        }

        let entries = self
            .entries
            .iter()
            .skip(offset)
            .take(limit)
            .map(|e| ListEntry {
                name: e.name.clone(),
                url: format!("https://pokeapi.co/api/v2/pokemon/{}/", e.id),
                image: None,
            })
            .collect();
        Ok(ListPage {
            total: self.entries.len(),
            entries,
        })
    }

    async fn fetch_detail(&self, name: &str) -> Result<Option<DetailRecord>, CoreError> {
        self.detail_calls.lock().unwrap().push(name.into());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.pause().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let failing = self.failing_details.lock().unwrap().contains(name);
        if failing {
            return Err(CoreError::Timeout);
        }

        Ok(self.entries.iter().find(|e| e.name == name).map(|e| DetailRecord {
            name: e.name.clone(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", e.id),
            image: format!(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}.png",
                e.id
            ),
            types: e.types.clone(),
            generation: generation_for_id(e.id),
        }))
    }
}

/// Names of the given records, in order.
pub fn names(records: &[DetailRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}
