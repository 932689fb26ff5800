// Wire types for the Pokémon GraphQL API.
//
// The upstream schema marks almost every field nullable, so these mirror
// that with `Option`/`#[serde(default)]` and expose accessors that flatten
// the nesting for callers.

use serde::{Deserialize, Serialize};

// ── Envelope ────────────────────────────────────────────────────────

/// Standard GraphQL request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphQlRequest<'a, V: Serialize> {
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: V,
}

/// Standard GraphQL response body.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

// ── Variables ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct PageVariables {
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct NameVariables<'a> {
    pub name: &'a str,
}

// ── Data payloads ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonsData {
    pub pokemons: Option<PokemonList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonData {
    pub pokemon: Option<PokemonDetail>,
}

/// One page of the `pokemons` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonList {
    /// Total catalog size reported by the server.
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<PokemonItem>,
}

/// A summary entry from the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonItem {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Response of the `pokemon(name)` detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: Option<u32>,
    pub name: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<TypeSlot>>,
    #[serde(default)]
    pub species: Option<SpeciesRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: Option<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRef {
    pub url: Option<String>,
}

impl PokemonDetail {
    /// Type names in slot order, skipping slots the server left empty.
    pub fn type_names(&self) -> Vec<String> {
        self.types
            .iter()
            .flatten()
            .filter_map(|slot| slot.kind.as_ref()?.name.clone())
            .collect()
    }

    /// URL of the species resource, if present and non-empty.
    pub fn species_url(&self) -> Option<&str> {
        self.species
            .as_ref()?
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}
