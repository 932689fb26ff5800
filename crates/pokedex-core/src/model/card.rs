use serde::{Deserialize, Serialize};

use super::{DetailRecord, ListEntry};

/// What a rendering layer draws for one entity.
///
/// Both paths produce cards: the unfiltered path from bare list entries
/// (no types, no generation), the filtered path from detail records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub url: String,
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u8>,
}

impl From<&ListEntry> for Card {
    fn from(entry: &ListEntry) -> Self {
        Self {
            name: entry.name.clone(),
            url: entry.url.clone(),
            image: entry.image.clone(),
            types: Vec::new(),
            generation: None,
        }
    }
}

impl From<&DetailRecord> for Card {
    fn from(record: &DetailRecord) -> Self {
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            image: Some(record.image.clone()),
            types: record.types.clone(),
            generation: Some(record.generation),
        }
    }
}
