//! `types` and `generations` handlers: the filter option lists.

use serde::Serialize;
use tabled::Tabled;

use pokedex_core::{GENERATIONS, POKEMON_TYPES};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

#[derive(Serialize, Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    name: &'static str,
}

#[derive(Serialize, Tabled)]
struct GenerationRow {
    #[tabled(rename = "Value")]
    value: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
}

pub fn types(format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let rows: Vec<TypeRow> = POKEMON_TYPES.iter().map(|&name| TypeRow { name }).collect();
    let out = output::render_list(
        format,
        &rows,
        |r| TypeRow { name: r.name },
        |r| r.name.to_owned(),
    )?;
    output::print_output(&out, quiet);
    Ok(())
}

pub fn generations(format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let rows: Vec<GenerationRow> = GENERATIONS
        .iter()
        .map(|&(value, label)| GenerationRow { value, label })
        .collect();
    let out = output::render_list(
        format,
        &rows,
        |r| GenerationRow {
            value: r.value,
            label: r.label,
        },
        |r| r.value.to_owned(),
    )?;
    output::print_output(&out, quiet);
    Ok(())
}
