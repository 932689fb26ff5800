// GraphQL surface of the public Pokémon API.
//
// Two operations are exposed: a paginated `pokemons` list and a per-entity
// `pokemon` detail lookup. The endpoint supports neither filtering nor
// sorting; callers layer that on top.

mod client;
pub mod queries;
pub mod types;

pub use client::GraphQlClient;
