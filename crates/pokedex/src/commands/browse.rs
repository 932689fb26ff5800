//! `browse` handler: drives the catalog facade the way a scrolling view
//! would, then renders what was collected.

use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use pokedex_core::{
    Card, Catalog, CatalogPath, CatalogSource, FilterCriteria, GENERATIONS, LoadOutcome,
    POKEMON_TYPES, SkipReason,
};

use crate::cli::{BrowseArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Gen")]
    generation: String,
}

impl CardRow {
    fn new(index: usize, card: &Card) -> Self {
        Self {
            index,
            name: card.name.clone(),
            types: if card.types.is_empty() {
                "-".into()
            } else {
                card.types.join(", ")
            },
            generation: card
                .generation
                .map_or_else(|| "-".into(), |g| g.to_string()),
        }
    }
}

// ── Rendered result ─────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct BrowseResult {
    path: CatalogPath,
    criteria: FilterCriteria,
    has_more: bool,
    entries: Vec<Card>,
}

// ── Criteria ────────────────────────────────────────────────────────

/// Build criteria from flags, rejecting unknown types and generations.
pub fn criteria_from_args(args: &BrowseArgs) -> Result<FilterCriteria, CliError> {
    let types: Vec<String> = args.types.iter().map(|t| t.to_lowercase()).collect();
    if let Some(bad) = types.iter().find(|t| !POKEMON_TYPES.contains(&t.as_str())) {
        return Err(CliError::Validation {
            field: "type".into(),
            reason: format!("unknown type '{bad}' (run `pokedex types`)"),
        });
    }

    if let Some(bad) = args
        .generations
        .iter()
        .find(|g| !GENERATIONS.iter().any(|(value, _)| *value == g.as_str()))
    {
        return Err(CliError::Validation {
            field: "generation".into(),
            reason: format!("unknown generation '{bad}' (expected 1-9)"),
        });
    }

    let mut criteria = FilterCriteria::new()
        .with_types(types)
        .with_generations(args.generations.iter().cloned());
    if let Some(ref name) = args.name {
        criteria = criteria.with_name(name.as_str());
    }
    Ok(criteria.normalized())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle<S: CatalogSource>(
    catalog: &Catalog<S>,
    args: &BrowseArgs,
    format: OutputFormat,
    color: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let criteria = criteria_from_args(args)?;
    let pages = usize::try_from(args.pages).unwrap_or(usize::MAX);

    let mut outcome = catalog.on_filter_change(criteria.clone()).await;
    if outcome == LoadOutcome::Skipped(SkipReason::Unchanged) {
        outcome = catalog.load_more().await;
    }
    let mut loads = 1;

    loop {
        debug!(?outcome, loads, "browse load finished");
        if matches!(
            outcome,
            LoadOutcome::Failed | LoadOutcome::Skipped(SkipReason::Exhausted)
        ) || loads >= pages
            || !catalog.view().has_more
        {
            break;
        }
        outcome = catalog.load_more().await;
        loads += 1;
    }

    let view = catalog.view();
    if let Some(err) = view.error {
        // Nothing to show; surface the transport failure.
        if view.entries.is_empty() {
            return Err(err.into());
        }
        warn!(error = %err, "showing partial results");
    } else if outcome == LoadOutcome::Failed && !quiet {
        eprintln!("warning: a page failed to load; showing what was collected");
    }

    let result = BrowseResult {
        path: view.path,
        criteria,
        has_more: view.has_more,
        entries: view.entries,
    };

    let out = output::render_single(
        format,
        &result,
        |r| render_pages(&r.entries, r.has_more, color),
        |r| {
            r.entries
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )?;
    output::print_output(&out, quiet);
    Ok(())
}

/// Table output split into pages of [`output::PAGE_SIZE`], each headed by
/// a page divider.
fn render_pages(entries: &[Card], has_more: bool, color: bool) -> String {
    if entries.is_empty() {
        return "No entries match.".into();
    }

    let mut sections = Vec::new();
    for (page, chunk) in entries.chunks(output::PAGE_SIZE).enumerate() {
        sections.push(output::page_divider(page + 1, color));
        let start = page * output::PAGE_SIZE;
        let rows: Vec<CardRow> = chunk
            .iter()
            .enumerate()
            .map(|(i, card)| CardRow::new(start + i + 1, card))
            .collect();
        sections.push(output::render_table(&rows));
    }
    if has_more {
        sections.push(output::accent("More available: pass --pages to load further", color));
    }
    sections.join("\n")
}
