// ── API → domain conversions ──
//
// `PokemonDetail` only carries an id, so the canonical resource URL and
// sprite URL are rebuilt from it.

use pokedex_api::{PokemonDetail, PokemonItem};

use crate::model::{DetailRecord, ListEntry, UNKNOWN_GENERATION, generation_from_species_url};

const POKEMON_URL_BASE: &str = "https://pokeapi.co/api/v2/pokemon";
const SPRITE_URL_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

impl From<PokemonItem> for ListEntry {
    fn from(item: PokemonItem) -> Self {
        Self {
            name: item.name,
            url: item.url,
            image: item.image.filter(|i| !i.is_empty()),
        }
    }
}

/// Build a [`DetailRecord`] from a detail response.
///
/// `requested` stands in for the name when the server omits it. Returns
/// `None` for a response without an id.
pub fn detail_record(requested: &str, detail: PokemonDetail) -> Option<DetailRecord> {
    let id = detail.id?;
    let generation = detail
        .species_url()
        .map_or(UNKNOWN_GENERATION, generation_from_species_url);
    let types = detail.type_names();

    Some(DetailRecord {
        name: detail.name.unwrap_or_else(|| requested.to_owned()),
        url: format!("{POKEMON_URL_BASE}/{id}/"),
        image: format!("{SPRITE_URL_BASE}/{id}.png"),
        types,
        generation,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pokedex_api::graphql::types::{NamedRef, SpeciesRef, TypeSlot};

    fn detail(id: Option<u32>, species: Option<&str>) -> PokemonDetail {
        PokemonDetail {
            id,
            name: Some("lapras".into()),
            types: Some(vec![
                TypeSlot {
                    kind: Some(NamedRef {
                        name: Some("water".into()),
                    }),
                },
                TypeSlot {
                    kind: Some(NamedRef {
                        name: Some("ice".into()),
                    }),
                },
            ]),
            species: species.map(|url| SpeciesRef {
                url: Some(url.into()),
            }),
        }
    }

    #[test]
    fn builds_urls_from_id() {
        let record = detail_record(
            "lapras",
            detail(Some(131), Some("https://pokeapi.co/api/v2/pokemon-species/131/")),
        )
        .unwrap();

        assert_eq!(
            record,
            DetailRecord {
                name: "lapras".into(),
                url: "https://pokeapi.co/api/v2/pokemon/131/".into(),
                image:
                    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/131.png"
                        .into(),
                types: vec!["water".into(), "ice".into()],
                generation: 1,
            }
        );
    }

    #[test]
    fn missing_species_is_unknown_generation() {
        let record = detail_record("lapras", detail(Some(131), None)).unwrap();
        assert_eq!(record.generation, UNKNOWN_GENERATION);
    }

    #[test]
    fn unparsable_species_url_is_generation_nine() {
        let record = detail_record("lapras", detail(Some(131), Some("species/lapras"))).unwrap();
        assert_eq!(record.generation, 9);
    }

    #[test]
    fn missing_id_yields_none() {
        assert!(detail_record("lapras", detail(None, None)).is_none());
    }

    #[test]
    fn list_item_drops_empty_image() {
        let entry = ListEntry::from(PokemonItem {
            name: "mew".into(),
            url: "https://pokeapi.co/api/v2/pokemon/151/".into(),
            image: Some(String::new()),
        });
        assert_eq!(entry.image, None);
    }
}
