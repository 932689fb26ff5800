// ── Remote catalog seam ──
//
// Everything above this trait is transport-agnostic. The GraphQL client
// implements it for production; tests substitute in-memory doubles.

use std::future::Future;

use pokedex_api::GraphQlClient;
use tracing::trace;

use crate::convert::detail_record;
use crate::error::CoreError;
use crate::model::{DetailRecord, ListEntry};

/// One page of the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Total catalog size as reported by the endpoint.
    pub total: usize,
    pub entries: Vec<ListEntry>,
}

/// A paginated list endpoint plus a per-entity detail endpoint.
///
/// Pages must be stable: the same offset returns the same entries in the
/// same order on every call.
pub trait CatalogSource: Send + Sync {
    /// Fetch up to `limit` entries starting at `offset`.
    fn list_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<ListPage, CoreError>> + Send;

    /// Look up one entity. `Ok(None)` means the endpoint had no record.
    fn fetch_detail(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DetailRecord>, CoreError>> + Send;
}

impl CatalogSource for GraphQlClient {
    async fn list_page(&self, limit: usize, offset: usize) -> Result<ListPage, CoreError> {
        let limit = u32::try_from(limit).map_err(|_| CoreError::Config {
            message: format!("page size {limit} exceeds the endpoint's range"),
        })?;
        let offset = u32::try_from(offset).map_err(|_| CoreError::Config {
            message: format!("offset {offset} exceeds the endpoint's range"),
        })?;

        let page = self.list_pokemons(limit, offset).await?;
        trace!(
            count = page.count,
            received = page.results.len(),
            "list page"
        );

        Ok(ListPage {
            total: usize::try_from(page.count).unwrap_or(usize::MAX),
            entries: page.results.into_iter().map(ListEntry::from).collect(),
        })
    }

    async fn fetch_detail(&self, name: &str) -> Result<Option<DetailRecord>, CoreError> {
        let detail = self.get_pokemon(name).await?;
        Ok(detail.and_then(|d| detail_record(name, d)))
    }
}
