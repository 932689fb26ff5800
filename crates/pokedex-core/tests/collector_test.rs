#![allow(clippy::unwrap_used)]
// Integration tests for the incremental collector (`FilteredCatalog`).

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use pokedex_core::{
    CatalogConfig, Cursor, FetchPhase, FilterCriteria, FilteredCatalog, LoadOutcome, SkipReason,
};

use common::{MockCatalog, names};

fn collector(source: MockCatalog) -> (Arc<MockCatalog>, FilteredCatalog<MockCatalog>) {
    let source = Arc::new(source);
    let catalog = FilteredCatalog::new(Arc::clone(&source), CatalogConfig::default());
    (source, catalog)
}

fn of_type(kind: &str) -> FilterCriteria {
    FilterCriteria::new().with_types([kind])
}

/// What the facade does on entering the filtered path.
async fn start(catalog: &FilteredCatalog<MockCatalog>, criteria: FilterCriteria) -> LoadOutcome {
    catalog.reset(criteria);
    catalog.load_more().await
}

// ── Page walking ────────────────────────────────────────────────────

#[tokio::test]
async fn sparse_matches_walk_into_the_next_page() {
    // 60 entries; five fire-types in the first page, three in the second.
    let mut source = MockCatalog::with_count(60);
    for index in [3, 10, 20, 30, 45, 52, 55, 58] {
        source = source.typed(index, &["fire"]);
    }
    let (source, catalog) = collector(source);

    let outcome = start(&catalog, of_type("fire")).await;

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            added: 8,
            offset: 100,
            has_more: false,
        }
    );
    assert_eq!(source.list_calls(), vec![(50, 0), (50, 50)]);
    assert_eq!(source.detail_calls().len(), 60);
    assert_eq!(
        names(&catalog.results()),
        vec![
            "mon-003", "mon-010", "mon-020", "mon-030", "mon-045", "mon-052", "mon-055", "mon-058"
        ]
    );
    assert_eq!(catalog.seen_count(), 60);
    assert_eq!(
        catalog.cursor(),
        Cursor {
            offset: 100,
            has_more: false,
        }
    );
}

#[tokio::test]
async fn stops_after_max_batches_without_enough_matches() {
    let (source, catalog) = collector(MockCatalog::with_count(400).typed(10, &["ghost"]));

    let outcome = start(&catalog, of_type("ghost")).await;

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            added: 1,
            offset: 150,
            has_more: true,
        }
    );
    assert_eq!(source.list_offsets(), vec![0, 50, 100]);
}

#[tokio::test]
async fn limit_reached_mid_batch_marks_the_rest_seen() {
    let (source, catalog) = collector(MockCatalog::with_count(120));

    let first = start(&catalog, of_type("normal")).await;

    assert_eq!(
        first,
        LoadOutcome::Loaded {
            added: 20,
            offset: 50,
            has_more: true,
        }
    );
    let results = names(&catalog.results());
    assert_eq!(results.first().map(String::as_str), Some("mon-000"));
    assert_eq!(results.last().map(String::as_str), Some("mon-019"));
    // The whole batch was fetched and classified, not just the first 20.
    assert_eq!(source.detail_calls().len(), 50);
    assert_eq!(catalog.seen_count(), 50);
    assert!(catalog.has_seen("mon-049"));

    let second = catalog.load_more().await;

    assert_eq!(
        second,
        LoadOutcome::Loaded {
            added: 20,
            offset: 100,
            has_more: true,
        }
    );
    let results = names(&catalog.results());
    assert_eq!(results.len(), 40);
    assert_eq!(results[20], "mon-050");
    assert_eq!(results[39], "mon-069");
}

#[tokio::test]
async fn fully_seen_page_skips_detail_fetch() {
    // Page two repeats page one's names; page three is fresh.
    let mut source = MockCatalog::with_count(150).typed(120, &["fire"]);
    for i in 0..50 {
        source = source.named(50 + i, &format!("mon-{i:03}"));
    }
    let (source, catalog) = collector(source);

    let outcome = start(&catalog, of_type("fire")).await;

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            added: 1,
            offset: 150,
            has_more: false,
        }
    );
    assert_eq!(source.list_offsets(), vec![0, 50, 100]);
    assert_eq!(source.detail_calls().len(), 100);
    assert_eq!(names(&catalog.results()), vec!["mon-120"]);
}

#[tokio::test]
async fn results_never_repeat_a_name() {
    // `mon-000` reappears at index 55 and again twice inside page three.
    let source = MockCatalog::with_count(150)
        .named(55, "mon-000")
        .named(101, "mon-100")
        .named(102, "mon-100");
    let (source, catalog) = collector(source);

    start(&catalog, of_type("normal")).await;
    while catalog.cursor().has_more {
        catalog.load_more().await;
    }

    let results = names(&catalog.results());
    let unique: HashSet<&String> = results.iter().collect();
    assert_eq!(unique.len(), results.len());
    assert_eq!(
        source
            .detail_calls()
            .iter()
            .filter(|n| n.as_str() == "mon-000")
            .count(),
        1
    );
    assert_eq!(
        source
            .detail_calls()
            .iter()
            .filter(|n| n.as_str() == "mon-100")
            .count(),
        1
    );
}

#[tokio::test]
async fn seen_set_grows_monotonically() {
    let (source, catalog) = collector(MockCatalog::with_count(130).yielding(0));

    start(&catalog, of_type("normal")).await;
    let mut previous = catalog.seen_count();
    let mut fetched = 50;
    while catalog.cursor().has_more {
        catalog.load_more().await;
        let now = catalog.seen_count();
        assert!(now >= previous);
        previous = now;
        fetched = (fetched + 50).min(130);
        assert_eq!(now, fetched);
    }

    for i in 0..130 {
        assert!(catalog.has_seen(&format!("mon-{i:03}")));
    }
    assert_eq!(source.list_offsets(), vec![0, 50, 100]);
}

// ── Failure isolation ───────────────────────────────────────────────

#[tokio::test]
async fn one_failed_detail_does_not_sink_the_batch() {
    let (source, catalog) = collector(MockCatalog::with_count(5));
    source.fail_detail("mon-002");

    let outcome = start(&catalog, of_type("normal")).await;

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            added: 4,
            offset: 50,
            has_more: false,
        }
    );
    assert_eq!(
        names(&catalog.results()),
        vec!["mon-000", "mon-001", "mon-003", "mon-004"]
    );
    assert!(catalog.has_seen("mon-002"));
    assert_eq!(catalog.seen_count(), 5);
    assert!(!catalog.cache().contains("mon-002"));
    assert_eq!(catalog.cache().len(), 4);
}

#[tokio::test]
async fn page_failure_leaves_session_untouched() {
    let (source, catalog) = collector(MockCatalog::with_count(120));
    start(&catalog, of_type("normal")).await;
    let cursor_before = catalog.cursor();
    let results_before = catalog.results();
    let seen_before = catalog.seen_count();

    source.fail_offset(50);
    let outcome = catalog.load_more().await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(catalog.cursor(), cursor_before);
    assert_eq!(catalog.results(), results_before);
    assert_eq!(catalog.seen_count(), seen_before);
    assert_eq!(catalog.phase(), FetchPhase::Idle);

    source.heal_offset(50);
    let retry = catalog.load_more().await;

    assert_eq!(
        retry,
        LoadOutcome::Loaded {
            added: 20,
            offset: 100,
            has_more: true,
        }
    );
    assert_eq!(source.list_offsets(), vec![0, 50, 50]);
}

#[tokio::test]
async fn failure_after_a_good_page_discards_the_whole_cycle() {
    let (source, catalog) = collector(MockCatalog::with_count(120).typed(10, &["ice"]));
    source.fail_offset(50);

    let outcome = start(&catalog, of_type("ice")).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(catalog.results().is_empty());
    assert_eq!(catalog.cursor(), Cursor::default());
    assert_eq!(catalog.seen_count(), 0);

    source.heal_offset(50);
    let retry = catalog.load_more().await;

    assert_eq!(
        retry,
        LoadOutcome::Loaded {
            added: 1,
            offset: 150,
            has_more: false,
        }
    );
    assert_eq!(names(&catalog.results()), vec!["mon-010"]);
    // Page one's details came from the cache on retry.
    assert_eq!(source.detail_calls().len(), 120);
    assert_eq!(catalog.cache().len(), 120);
}

// ── Guards ──────────────────────────────────────────────────────────

#[tokio::test]
async fn concurrent_load_more_runs_one_cycle() {
    let (source, catalog) = collector(MockCatalog::with_count(120).yielding(3));
    catalog.reset(of_type("normal"));

    let (a, b) = tokio::join!(catalog.load_more(), catalog.load_more());

    let outcomes = [a, b];
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| matches!(o, LoadOutcome::Loaded { .. }))
            .count(),
        1
    );
    assert!(outcomes.contains(&LoadOutcome::Skipped(SkipReason::InFlight)));
    assert_eq!(source.list_offsets(), vec![0]);
    assert_eq!(catalog.results().len(), 20);
    assert_eq!(catalog.phase(), FetchPhase::Idle);
}

#[tokio::test]
async fn exhausted_load_more_changes_nothing() {
    let (source, catalog) = collector(MockCatalog::with_count(10));
    start(&catalog, of_type("normal")).await;
    assert!(!catalog.cursor().has_more);
    let results_before = catalog.results();

    let outcome = catalog.load_more().await;

    assert_eq!(outcome, LoadOutcome::Skipped(SkipReason::Exhausted));
    assert_eq!(catalog.results(), results_before);
    assert_eq!(source.list_calls().len(), 1);
}

// ── Session reset ───────────────────────────────────────────────────

#[tokio::test]
async fn new_criteria_start_over_from_offset_zero() {
    let source = MockCatalog::with_count(120)
        .typed(5, &["water"])
        .typed(60, &["fire"]);
    let (source, catalog) = collector(source);

    start(&catalog, of_type("fire")).await;
    assert_eq!(names(&catalog.results()), vec!["mon-060"]);
    let details_before = source.detail_calls().len();

    let outcome = start(&catalog, of_type("water")).await;

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            added: 1,
            offset: 150,
            has_more: false,
        }
    );
    assert_eq!(names(&catalog.results()), vec!["mon-005"]);
    assert_eq!(source.list_offsets(), vec![0, 50, 100, 0, 50, 100]);
    // Details survive the reset; nothing was refetched.
    assert_eq!(source.detail_calls().len(), details_before);
}

#[tokio::test]
async fn reset_mid_flight_discards_the_stale_cycle() {
    let source = MockCatalog::with_count(120)
        .typed(5, &["water"])
        .typed(7, &["fire"])
        .yielding(3);
    let (_source, catalog) = collector(source);

    let (first, second) = tokio::join!(start(&catalog, of_type("fire")), async {
        tokio::task::yield_now().await;
        start(&catalog, of_type("water")).await
    });

    assert!(matches!(first, LoadOutcome::Loaded { .. }));
    assert_eq!(second, LoadOutcome::Skipped(SkipReason::InFlight));
    assert_eq!(catalog.criteria(), of_type("water"));
    assert_eq!(names(&catalog.results()), vec!["mon-005"]);
    assert_eq!(catalog.seen_count(), 120);
    assert_eq!(catalog.phase(), FetchPhase::Idle);
}
