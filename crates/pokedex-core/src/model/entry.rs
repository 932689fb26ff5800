use serde::{Deserialize, Serialize};

/// A summary entry from the list endpoint. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub name: String,
    pub url: String,
    pub image: Option<String>,
}

/// An entry enriched with the attributes the filters look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub name: String,
    pub url: String,
    pub image: String,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// 1–9, or [`UNKNOWN_GENERATION`](super::UNKNOWN_GENERATION) when the
    /// detail carried no species reference.
    pub generation: u8,
}
