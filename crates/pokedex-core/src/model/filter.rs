// ── Filter criteria and predicate ──
//
// Three AND-combined dimensions: name substring, type set (any one
// matches), generation set (any one matches). An absent dimension imposes
// no constraint.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::DetailRecord;

/// Every type the filter bar offers.
pub const POKEMON_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Active filter set. Compared by value to decide whether a session resets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the entity name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type names; a record matches if it has any of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeSet<String>>,
    /// Generations as decimal strings; a record matches if its generation
    /// is any of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generations: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name filter. An empty string clears it.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    /// Set the type filter. An empty iterator clears it.
    pub fn with_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.types = non_empty(types);
        self
    }

    /// Set the generation filter. An empty iterator clears it.
    pub fn with_generations<I, T>(mut self, generations: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.generations = non_empty(generations);
        self
    }

    /// Collapse empty strings and sets to `None`, so that two criteria
    /// that constrain nothing compare equal.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|n| !n.is_empty()),
            types: self.types.filter(|t| !t.is_empty()),
            generations: self.generations.filter(|g| !g.is_empty()),
        }
    }

    /// The name filter, if set and non-empty.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Whether a type or generation constraint is active. These are the
    /// dimensions the list endpoint cannot evaluate.
    pub fn has_attribute_filters(&self) -> bool {
        self.types.as_ref().is_some_and(|t| !t.is_empty())
            || self.generations.as_ref().is_some_and(|g| !g.is_empty())
    }

    /// Whether `record` satisfies every active dimension.
    ///
    /// Checks run cheapest first and short-circuit.
    pub fn matches(&self, record: &DetailRecord) -> bool {
        if !name_matches(&record.name, self.name_filter()) {
            return false;
        }

        if let Some(types) = self.types.as_ref().filter(|t| !t.is_empty()) {
            if !record.types.iter().any(|t| types.contains(t)) {
                return false;
            }
        }

        if let Some(generations) = self.generations.as_ref().filter(|g| !g.is_empty()) {
            if !generations.contains(&record.generation.to_string()) {
                return false;
            }
        }

        true
    }
}

/// Predicate over an optional detail: a missing detail never matches.
pub fn matches(record: Option<&DetailRecord>, criteria: &FilterCriteria) -> bool {
    record.is_some_and(|r| criteria.matches(r))
}

/// Case-insensitive substring test; `None` or empty needle matches all.
pub fn name_matches(name: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) if !needle.is_empty() => {
            name.to_lowercase().contains(&needle.to_lowercase())
        }
        _ => true,
    }
}

fn non_empty<I, T>(values: I) -> Option<BTreeSet<String>>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
    (!set.is_empty()).then_some(set)
}
