//! Client-side fetch-and-filter engine for the Pokémon catalog.
//!
//! The upstream GraphQL API only offers offset/limit pagination and a
//! per-entity detail lookup. This crate reconciles that with client-side
//! filtering by type, generation and name:
//!
//! - **[`Catalog`]**: Facade consumed by a rendering layer. Exposes
//!   [`on_filter_change()`](Catalog::on_filter_change),
//!   [`on_clear()`](Catalog::on_clear), [`load_more()`](Catalog::load_more)
//!   and a [`CatalogView`] snapshot, dispatching through [`select_path`].
//!
//! - **[`FilteredCatalog`]**: The incremental collector. Pulls list pages,
//!   enriches unseen entries through the [`DetailCache`]-backed batch
//!   fetcher, filters them and accumulates matches.
//!
//! - **[`CatalogPager`]**: Plain offset/limit pagination used when only a
//!   name filter (or nothing) is active.
//!
//! - **[`CatalogSource`]**: The seam to the remote API, implemented for
//!   [`pokedex_api::GraphQlClient`].

pub mod catalog;
pub mod collector;
pub mod config;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod load;
pub mod model;
pub mod pager;
pub mod selector;
pub mod source;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{Catalog, CatalogView};
pub use collector::{Cursor, FilteredCatalog};
pub use config::CatalogConfig;
pub use error::CoreError;
pub use load::{FetchPhase, LoadOutcome, SkipReason};
pub use pager::CatalogPager;
pub use selector::{CatalogPath, select_path};
pub use source::{CatalogSource, ListPage};
pub use store::{DetailCache, SeenSet};

pub use model::{
    Card, DetailRecord, FilterCriteria, GENERATIONS, ListEntry, POKEMON_TYPES,
    UNKNOWN_GENERATION, generation_for_id, generation_from_species_url, species_id_from_url,
};
