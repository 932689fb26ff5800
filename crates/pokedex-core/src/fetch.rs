// ── Batch detail fetcher ──
//
// Names are processed in consecutive chunks of `width`. Every lookup in a
// chunk runs concurrently and the chunk is joined before the next one
// starts, so at most `width` detail requests are ever in flight.

use futures_util::future::join_all;
use tracing::{debug, trace, warn};

use crate::model::DetailRecord;
use crate::source::CatalogSource;
use crate::store::DetailCache;

/// Fetch details for `names`, consulting `cache` first.
///
/// The output is positionally aligned with `names`. A failed or empty
/// lookup yields `None` for that position only.
pub async fn fetch_details<S>(
    source: &S,
    cache: &DetailCache,
    names: &[String],
    width: usize,
) -> Vec<Option<DetailRecord>>
where
    S: CatalogSource,
{
    let width = width.max(1);
    let mut details = Vec::with_capacity(names.len());

    for (index, chunk) in names.chunks(width).enumerate() {
        trace!(chunk = index, size = chunk.len(), "fetching detail chunk");
        let resolved = join_all(chunk.iter().map(|name| fetch_one(source, cache, name))).await;
        details.extend(resolved);
    }

    debug!(
        requested = names.len(),
        resolved = details.iter().flatten().count(),
        "detail batch complete"
    );
    details
}

async fn fetch_one<S>(source: &S, cache: &DetailCache, name: &str) -> Option<DetailRecord>
where
    S: CatalogSource,
{
    if let Some(hit) = cache.get(name) {
        trace!(name, "detail cache hit");
        return Some(hit);
    }

    match source.fetch_detail(name).await {
        Ok(Some(record)) => Some(cache.put(name, record)),
        Ok(None) => {
            debug!(name, "detail lookup returned nothing");
            None
        }
        Err(e) => {
            warn!(name, error = %e, "detail fetch failed");
            None
        }
    }
}
