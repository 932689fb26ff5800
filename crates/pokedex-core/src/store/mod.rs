// ── Session-scoped memory ──
//
// Both structures grow monotonically. The detail cache lives as long as
// the catalog; the seen set is cleared on every filter change.

mod detail_cache;
mod seen;

pub use detail_cache::DetailCache;
pub use seen::SeenSet;
