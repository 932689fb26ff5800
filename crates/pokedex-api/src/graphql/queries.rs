//! Query documents sent to the GraphQL endpoint.

/// Paginated index of summary entries.
pub const POKEMONS: &str = "\
query Pokemons($limit: Int, $offset: Int) {
  pokemons(limit: $limit, offset: $offset) {
    count
    results {
      url
      name
      image
    }
  }
}";

/// Per-entity lookup with the attributes needed for filtering.
pub const POKEMON_DETAIL: &str = "\
query Pokemon($name: String!) {
  pokemon(name: $name) {
    id
    name
    types {
      type {
        name
      }
    }
    species {
      url
    }
  }
}";
