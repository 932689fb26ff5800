// ── Domain model ──
//
// Canonical types the fetch-and-filter engine works with. Wire types from
// `pokedex-api` are converted into these in `crate::convert`.

pub mod card;
pub mod entry;
pub mod filter;
pub mod generation;

pub use card::Card;
pub use entry::{DetailRecord, ListEntry};
pub use filter::{FilterCriteria, POKEMON_TYPES};
pub use generation::{
    GENERATIONS, UNKNOWN_GENERATION, generation_for_id, generation_from_species_url,
    species_id_from_url,
};
