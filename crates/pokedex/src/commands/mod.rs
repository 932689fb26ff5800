//! Command dispatch: bridges CLI args -> catalog -> output formatting.

pub mod browse;
pub mod config_cmd;
pub mod reference;
pub mod show;

use pokedex_api::GraphQlClient;
use pokedex_core::Catalog;

use crate::cli::{Command, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

/// Dispatch a command that talks to the catalog endpoint.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::resolve(global)?;
    let format = config::output_format(global, &cfg);
    let color = output::should_color(global.color);

    let client = GraphQlClient::new(cfg.endpoint_url()?.as_str(), &cfg.transport_config())?;
    tracing::debug!(endpoint = %client.endpoint(), command = ?cmd, "dispatching command");

    match cmd {
        Command::Browse(args) => {
            let catalog = Catalog::new(client, cfg.catalog_config());
            browse::handle(&catalog, &args, format, color, global.quiet).await
        }
        Command::Show(args) => show::handle(&client, &args.name, format, color, global.quiet).await,
        // Handled before a client is built
        Command::Types | Command::Generations | Command::Config(_) | Command::Completions(_) => {
            Ok(())
        }
    }
}
