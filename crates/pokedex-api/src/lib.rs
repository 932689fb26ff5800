// pokedex-api: Async Rust client for the public Pokémon GraphQL API

pub mod error;
pub mod graphql;
pub mod transport;

pub use error::Error;
pub use graphql::GraphQlClient;
pub use graphql::types::{PokemonDetail, PokemonItem, PokemonList};
pub use transport::{TlsMode, TransportConfig};

/// Public GraphQL wrapper around PokeAPI used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://graphql-pokeapi.vercel.app/api/graphql";
