//! Shared configuration for the pokedex tools.
//!
//! TOML file plus `POKEDEX_*` environment overrides, validation, and
//! translation to the runtime types of the other crates. The CLI layers
//! its flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use pokedex_api::{DEFAULT_ENDPOINT, TlsMode, TransportConfig};
use pokedex_core::CatalogConfig;

/// Prefix for environment overrides. Nested keys use `__`, e.g.
/// `POKEDEX_TUNING__LIMIT=40`.
pub const ENV_PREFIX: &str = "POKEDEX_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// GraphQL endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Extra CA certificate (PEM) to trust.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    #[serde(default)]
    pub tuning: Tuning,

    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            ca_cert: None,
            tuning: Tuning::default(),
            defaults: Defaults::default(),
        }
    }
}

/// Fetch-and-filter knobs, mirrored one-to-one onto [`CatalogConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tuning {
    pub limit: usize,
    pub batch_size: usize,
    pub max_batches: usize,
    pub parallel_requests: usize,
    pub page_size: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        let CatalogConfig {
            limit,
            batch_size,
            max_batches,
            parallel_requests,
            page_size,
        } = CatalogConfig::default();
        Self {
            limit,
            batch_size,
            max_batches,
            parallel_requests,
            page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    /// Output format: "table", "json", "yaml" or "plain".
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}

const OUTPUT_FORMATS: [&str; 4] = ["table", "json", "yaml", "plain"];

// ── Validation & translation ────────────────────────────────────────

impl Config {
    /// Reject values the runtime cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.endpoint_url()?;

        if self.timeout == 0 {
            return Err(invalid("timeout", "must be at least 1 second"));
        }

        let Tuning {
            limit,
            batch_size,
            max_batches,
            parallel_requests,
            page_size,
        } = self.tuning;
        for (field, value) in [
            ("tuning.limit", limit),
            ("tuning.batch_size", batch_size),
            ("tuning.max_batches", max_batches),
            ("tuning.parallel_requests", parallel_requests),
            ("tuning.page_size", page_size),
        ] {
            if value == 0 {
                return Err(invalid(field, "must be greater than zero"));
            }
        }

        if !OUTPUT_FORMATS.contains(&self.defaults.output.as_str()) {
            return Err(invalid(
                "defaults.output",
                &format!(
                    "expected one of {}, got '{}'",
                    OUTPUT_FORMATS.join(", "),
                    self.defaults.output
                ),
            ));
        }

        Ok(())
    }

    /// Parse the endpoint, accepting only http and https.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url: Url = self
            .endpoint
            .parse()
            .map_err(|e| invalid("endpoint", &format!("{e}: {}", self.endpoint)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(
                "endpoint",
                &format!("unsupported scheme '{other}', expected http or https"),
            )),
        }
    }

    pub fn transport_config(&self) -> TransportConfig {
        let tls = self
            .ca_cert
            .clone()
            .map_or(TlsMode::System, TlsMode::CustomCa);
        TransportConfig {
            tls,
            timeout: Duration::from_secs(self.timeout),
        }
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        let Tuning {
            limit,
            batch_size,
            max_batches,
            parallel_requests,
            page_size,
        } = self.tuning;
        CatalogConfig {
            limit,
            batch_size,
            max_batches,
            parallel_requests,
            page_size,
        }
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "pokedex", "pokedex").map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("pokedex");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Layered sources: defaults, then the TOML file at `path`, then env.
pub fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load and validate config from `path` + environment.
///
/// A missing file is not an error; defaults apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment_for(path).extract()?;
    config.validate()?;
    Ok(config)
}

/// Load and validate config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config, falling back to defaults on any error.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}
