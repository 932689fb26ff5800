//! CLI configuration: thin wrapper around `pokedex_config`.
//!
//! Loads the file + env layers and applies `GlobalOpts` flag overrides
//! (--endpoint, --timeout, --output) on top.

use std::path::PathBuf;

pub use pokedex_config::{Config, config_path, save_config_to};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Config file in effect: `--config` if given, else the platform default.
pub fn active_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load config from file + env, apply flag overrides, then validate.
pub fn resolve(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut config: Config = pokedex_config::figment_for(&active_path(global))
        .extract()
        .map_err(pokedex_config::ConfigError::from)?;

    if let Some(ref endpoint) = global.endpoint {
        config.endpoint.clone_from(endpoint);
    }
    if let Some(timeout) = global.timeout {
        config.timeout = timeout;
    }

    config.validate()?;
    Ok(config)
}

/// Output format: `--output` flag, else `defaults.output` from config.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.unwrap_or(match config.defaults.output.as_str() {
        "json" => OutputFormat::Json,
        "yaml" => OutputFormat::Yaml,
        "plain" => OutputFormat::Plain,
        _ => OutputFormat::Table,
    })
}
