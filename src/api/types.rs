//! Wire shapes of the API responses.
//!
//! Only the fields the viewer uses are declared; serde ignores the rest.

use serde::{Deserialize, Serialize};

use crate::catalog::{Ability, Record, Sprites, Stat};

/// Response of the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordPayload {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    stats: Vec<StatEntry>,
    #[serde(default)]
    abilities: Vec<AbilityEntry>,
    #[serde(default)]
    sprites: SpriteSet,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    base_stat: u32,
    #[serde(default)]
    effort: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilityEntry {
    ability: NamedResource,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Debug, Default, Deserialize)]
struct SpriteSet {
    front_default: Option<String>,
    #[serde(default)]
    other: OtherSprites,
}

#[derive(Debug, Default, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Artwork,
}

#[derive(Debug, Default, Deserialize)]
struct Artwork {
    front_default: Option<String>,
}

impl From<RecordPayload> for Record {
    fn from(payload: RecordPayload) -> Self {
        let mut types = payload.types;
        types.sort_by_key(|t| t.slot);

        Record {
            id: payload.id,
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            types: types.into_iter().map(|t| t.kind.name).collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base: s.base_stat,
                    effort: s.effort,
                })
                .collect(),
            abilities: payload
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    hidden: a.is_hidden,
                })
                .collect(),
            sprites: Sprites {
                front: payload.sprites.front_default,
                artwork: payload.sprites.other.official_artwork.front_default,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARIZARD: &str = r#"{
        "id": 6,
        "name": "charizard",
        "height": 17,
        "weight": 905,
        "base_experience": 267,
        "types": [
            {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}},
            {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}}
        ],
        "stats": [
            {"base_stat": 78, "effort": 0, "stat": {"name": "hp", "url": "u"}},
            {"base_stat": 109, "effort": 3, "stat": {"name": "special-attack", "url": "u"}}
        ],
        "abilities": [
            {"ability": {"name": "blaze", "url": "u"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "solar-power", "url": "u"}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {
            "front_default": "https://img/6.png",
            "other": {"official-artwork": {"front_default": "https://img/art/6.png"}}
        }
    }"#;

    #[test]
    fn decodes_full_payload() {
        let payload: RecordPayload = serde_json::from_str(CHARIZARD).unwrap();
        let record = Record::from(payload);
        assert_eq!(record.id, 6);
        assert_eq!(record.types, vec!["fire", "flying"]);
        assert_eq!(record.stats[1].name, "special-attack");
        assert_eq!(record.stats[1].effort, 3);
        assert!(record.abilities[1].hidden);
        assert_eq!(record.image_url(), Some("https://img/art/6.png"));
    }

    #[test]
    fn missing_artwork_is_tolerated() {
        let json = r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69,
            "sprites": {"front_default": null, "other": {}}}"#;
        let record = Record::from(serde_json::from_str::<RecordPayload>(json).unwrap());
        assert!(record.types.is_empty());
        assert_eq!(record.image_url(), None);
    }

    #[test]
    fn decodes_list_page() {
        let json = r#"{"count": 1302, "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [{"name": "bulbasaur", "url": "u1"}, {"name": "ivysaur", "url": "u2"}]}"#;
        let page: ListPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1302);
        assert!(page.previous.is_none());
        assert_eq!(page.results[1].name, "ivysaur");
    }
}
