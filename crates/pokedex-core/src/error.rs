// ── Core error types ──
//
// Domain errors from pokedex-core. Consumers never see raw reqwest or
// serde failures; the `From<pokedex_api::Error>` impl translates them.

use thiserror::Error;

/// Unified error type for the core crate.
///
/// `Clone` so the last transport failure can be held in a view snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach catalog endpoint at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Catalog request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Entity not found: {name}")]
    NotFound { name: String },

    #[error("Malformed response from catalog endpoint: {message}")]
    InvalidResponse { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pokedex_api::Error> for CoreError {
    fn from(err: pokedex_api::Error) -> Self {
        match err {
            pokedex_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            pokedex_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            pokedex_api::Error::Tls(reason) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {reason}"),
            },
            pokedex_api::Error::Http { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            pokedex_api::Error::GraphQl { messages } => CoreError::Api {
                message: messages.join("; "),
                status: None,
            },
            pokedex_api::Error::MissingData { operation } => CoreError::InvalidResponse {
                message: format!("`{operation}` returned no data"),
            },
            pokedex_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
        }
    }
}
