//! `show` handler: one detail lookup.

use pokedex_core::{CatalogSource, CoreError, DetailRecord, GENERATIONS};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

fn generation_label(generation: u8) -> &'static str {
    usize::from(generation)
        .checked_sub(1)
        .and_then(|i| GENERATIONS.get(i))
        .map_or("Unknown", |(_, label)| *label)
}

fn detail(record: &DetailRecord, color: bool) -> String {
    [
        format!("Name:       {}", output::accent(&record.name, color)),
        format!("Types:      {}", record.types.join(", ")),
        format!(
            "Generation: {} ({})",
            record.generation,
            generation_label(record.generation)
        ),
        format!("URL:        {}", record.url),
        format!("Sprite:     {}", record.image),
    ]
    .join("\n")
}

pub async fn handle<S: CatalogSource>(
    source: &S,
    name: &str,
    format: OutputFormat,
    color: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let needle = name.trim().to_lowercase();
    let record = source
        .fetch_detail(&needle)
        .await?
        .ok_or(CoreError::NotFound { name: needle })?;

    let out = output::render_single(
        format,
        &record,
        |r| detail(r, color),
        |r| r.name.clone(),
    )?;
    output::print_output(&out, quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_labels() {
        assert_eq!(generation_label(1), "Gen I (Kanto)");
        assert_eq!(generation_label(9), "Gen IX (Paldea)");
        assert_eq!(generation_label(0), "Unknown");
    }
}
