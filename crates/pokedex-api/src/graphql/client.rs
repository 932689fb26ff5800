// Hand-crafted async HTTP client for the Pokémon GraphQL API.
//
// Every operation is a POST of `{operationName, query, variables}` to a
// single endpoint. Responses use the standard `{data, errors}` envelope.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use super::queries;
use super::types::{
    GraphQlRequest, GraphQlResponse, NameVariables, PageVariables, PokemonData, PokemonDetail,
    PokemonList, PokemonsData,
};
use crate::Error;
use crate::transport::TransportConfig;

/// Async client for the Pokémon GraphQL endpoint.
///
/// Stateless apart from the pooled `reqwest::Client`; cheap to share by
/// reference across concurrent lookups.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphQlClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `endpoint` using the given transport settings.
    pub fn new(endpoint: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)?;
        let http = transport.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// The GraphQL endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ── Transport ────────────────────────────────────────────────────

    async fn execute<V, T>(
        &self,
        operation: &'static str,
        query: &str,
        variables: V,
    ) -> Result<T, Error>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        debug!(operation, endpoint = %self.endpoint, "POST graphql");

        let body = GraphQlRequest {
            operation_name: operation,
            query,
            variables,
        };
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let raw = resp.text().await?;
        trace!(operation, status = status.as_u16(), bytes = raw.len(), "graphql response");

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_str(&raw).map_err(|e| {
            let preview: String = raw.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: raw.clone(),
            }
        })?;

        if !envelope.errors.is_empty() {
            return Err(Error::GraphQl {
                messages: envelope.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        envelope.data.ok_or(Error::MissingData { operation })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch one page of the catalog index.
    ///
    /// A `null` `pokemons` field is reported as an empty page so callers can
    /// treat it as end of input.
    pub async fn list_pokemons(&self, limit: u32, offset: u32) -> Result<PokemonList, Error> {
        let data: PokemonsData = self
            .execute("Pokemons", queries::POKEMONS, PageVariables { limit, offset })
            .await?;
        Ok(data.pokemons.unwrap_or_default())
    }

    /// Look up a single entity by name.
    ///
    /// Returns `Ok(None)` when the server has no record for `name`
    /// (a `null` object, or an object without an `id`).
    pub async fn get_pokemon(&self, name: &str) -> Result<Option<PokemonDetail>, Error> {
        let data: PokemonData = self
            .execute("Pokemon", queries::POKEMON_DETAIL, NameVariables { name })
            .await?;
        Ok(data.pokemon.filter(|p| p.id.is_some()))
    }
}
