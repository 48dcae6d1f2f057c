//! Catalog item model for the PokeAPI GraphQL endpoint
//!
//! The shapes here mirror the nested `pokemon_v2_*` selection sets the
//! GraphQL queries ask for. Optional fields degrade to neutral defaults
//! (empty, zero, `None`) instead of failing, so a partially populated
//! record still flows through the pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The type labels the catalog knows how to filter by.
pub const TYPE_VOCABULARY: [&str; 17] = [
    "fire", "water", "grass", "electric", "ghost", "dragon", "bug", "fighting", "poison",
    "psychic", "normal", "rock", "flying", "fairy", "ground", "steel", "ice",
];

/// The six fixed stats every catalog item may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatName {
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    /// API-facing name, as it appears in `pokemon_v2_stat.name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }

    /// Short label used in table headers.
    pub fn label(&self) -> &'static str {
        match self {
            StatName::Hp => "HP",
            StatName::Attack => "Atk",
            StatName::Defense => "Def",
            StatName::SpecialAttack => "SpA",
            StatName::SpecialDefense => "SpD",
            StatName::Speed => "Spe",
        }
    }
}

impl std::fmt::Display for StatName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for stat and sort names coming from user input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown stat: {0}. Valid stats: hp, attack, defense, special-attack, special-defense, speed")]
    UnknownStat(String),

    #[error("Unknown sort key: {0}. Valid keys: name, hp, attack, defense, special-attack, special-defense, speed")]
    UnknownSort(String),

    #[error("Unknown type: {0}. Run `pokedex types` to list the vocabulary.")]
    UnknownType(String),
}

impl std::str::FromStr for StatName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the API spelling and the underscore variant
        match s.to_lowercase().replace('_', "-").as_str() {
            "hp" => Ok(StatName::Hp),
            "attack" => Ok(StatName::Attack),
            "defense" => Ok(StatName::Defense),
            "special-attack" => Ok(StatName::SpecialAttack),
            "special-defense" => Ok(StatName::SpecialDefense),
            "speed" => Ok(StatName::Speed),
            _ => Err(ParseError::UnknownStat(s.to_string())),
        }
    }
}

/// Catalog item from the GraphQL API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub base_experience: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub is_default: bool,
    pub order: Option<i32>,
    #[serde(rename = "pokemon_v2_pokemonsprites", default)]
    pub sprites: Vec<SpriteSet>,
    #[serde(rename = "pokemon_v2_pokemontypes", default)]
    pub types: Vec<TypeSlot>,
    #[serde(rename = "pokemon_v2_pokemonstats", default)]
    pub stats: Vec<StatSlot>,
}

/// One sprite record; the API returns the inner `sprites` field either as a
/// JSON object or as a JSON-encoded string depending on the endpoint version.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpriteSet {
    pub sprites: Value,
}

/// One type tag slot
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeSlot {
    #[serde(rename = "pokemon_v2_type")]
    pub ty: NamedRef,
    pub type_id: Option<u32>,
}

/// One stat slot
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatSlot {
    #[serde(rename = "pokemon_v2_stat")]
    pub stat: NamedRef,
    pub base_stat: u32,
    pub stat_id: Option<u32>,
}

/// Nested `{ name }` reference used by type and stat slots
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NamedRef {
    pub name: String,
}

impl Pokemon {
    /// Type tags in slot order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|slot| slot.ty.name.as_str()).collect()
    }

    /// Exact, case-sensitive membership test against the item's type tags.
    pub fn has_type(&self, ty: &str) -> bool {
        self.types.iter().any(|slot| slot.ty.name == ty)
    }

    /// Value of the named stat; a missing stat reads as 0.
    pub fn stat_value(&self, stat: StatName) -> u32 {
        self.stats
            .iter()
            .find(|slot| slot.stat.name == stat.as_str())
            .map(|slot| slot.base_stat)
            .unwrap_or(0)
    }

    /// Default front sprite URL, if present.
    pub fn front_sprite(&self) -> Option<String> {
        self.sprite_url(&["front_default"])
    }

    /// Official artwork URL, if present.
    pub fn artwork_sprite(&self) -> Option<String> {
        self.sprite_url(&["other", "official-artwork", "front_default"])
    }

    fn sprite_url(&self, path: &[&str]) -> Option<String> {
        let raw = &self.sprites.first()?.sprites;
        let normalized = normalize_sprites(raw)?;
        let mut current = &normalized;
        for key in path {
            current = current.get(key)?;
        }
        current.as_str().map(|s| s.to_string())
    }
}

/// Decode the sprite field into an object, accepting both the object form
/// and the string-encoded form.
fn normalize_sprites(value: &Value) -> Option<Value> {
    match value {
        Value::Object(_) => Some(value.clone()),
        Value::String(s) => serde_json::from_str(s).ok(),
        _ => None,
    }
}

/// Uppercase the first character of a name for display.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture_json() -> Value {
        json!({
            "id": 4,
            "name": "charmander",
            "base_experience": 62,
            "height": 6,
            "is_default": true,
            "order": 5,
            "pokemon_v2_pokemonsprites": [
                {
                    "sprites": {
                        "front_default": "https://img.example/4.png",
                        "other": {
                            "official-artwork": {
                                "front_default": "https://img.example/art/4.png"
                            }
                        }
                    }
                }
            ],
            "pokemon_v2_pokemontypes": [
                { "pokemon_v2_type": { "name": "fire" }, "type_id": 10 }
            ],
            "pokemon_v2_pokemonstats": [
                { "pokemon_v2_stat": { "name": "hp" }, "base_stat": 39, "stat_id": 1 },
                { "pokemon_v2_stat": { "name": "attack" }, "base_stat": 52, "stat_id": 2 },
                { "pokemon_v2_stat": { "name": "speed" }, "base_stat": 65, "stat_id": 6 }
            ]
        })
    }

    #[test]
    fn test_deserialize_nested_shape() {
        let pokemon: Pokemon = serde_json::from_value(fixture_json()).unwrap();

        assert_eq!(pokemon.id, 4);
        assert_eq!(pokemon.name, "charmander");
        assert_eq!(pokemon.base_experience, Some(62));
        assert_eq!(pokemon.height, Some(6));
        assert!(pokemon.is_default);
        assert_eq!(pokemon.types.len(), 1);
        assert_eq!(pokemon.stats.len(), 3);
    }

    #[test]
    fn test_deserialize_missing_optionals() {
        let pokemon: Pokemon = serde_json::from_value(json!({
            "id": 1,
            "name": "bulbasaur",
            "base_experience": null,
            "height": null,
            "order": null
        }))
        .unwrap();

        assert_eq!(pokemon.base_experience, None);
        assert!(!pokemon.is_default);
        assert!(pokemon.types.is_empty());
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.sprites.is_empty());
    }

    #[test]
    fn test_type_names_and_has_type() {
        let pokemon: Pokemon = serde_json::from_value(fixture_json()).unwrap();

        assert_eq!(pokemon.type_names(), vec!["fire"]);
        assert!(pokemon.has_type("fire"));
        assert!(!pokemon.has_type("water"));
        // Case-sensitive match
        assert!(!pokemon.has_type("Fire"));
    }

    #[test]
    fn test_stat_value() {
        let pokemon: Pokemon = serde_json::from_value(fixture_json()).unwrap();

        assert_eq!(pokemon.stat_value(StatName::Attack), 52);
        assert_eq!(pokemon.stat_value(StatName::Speed), 65);
    }

    #[test]
    fn test_stat_value_missing_reads_zero() {
        let pokemon: Pokemon = serde_json::from_value(fixture_json()).unwrap();

        assert_eq!(pokemon.stat_value(StatName::Defense), 0);
        assert_eq!(pokemon.stat_value(StatName::SpecialAttack), 0);
    }

    #[test]
    fn test_sprite_from_object() {
        let pokemon: Pokemon = serde_json::from_value(fixture_json()).unwrap();

        assert_eq!(
            pokemon.front_sprite().as_deref(),
            Some("https://img.example/4.png")
        );
        assert_eq!(
            pokemon.artwork_sprite().as_deref(),
            Some("https://img.example/art/4.png")
        );
    }

    #[test]
    fn test_sprite_from_encoded_string() {
        let mut fixture = fixture_json();
        fixture["pokemon_v2_pokemonsprites"][0]["sprites"] =
            json!("{\"front_default\": \"https://img.example/s/4.png\"}");
        let pokemon: Pokemon = serde_json::from_value(fixture).unwrap();

        assert_eq!(
            pokemon.front_sprite().as_deref(),
            Some("https://img.example/s/4.png")
        );
        assert_eq!(pokemon.artwork_sprite(), None);
    }

    #[test]
    fn test_sprite_missing() {
        let mut fixture = fixture_json();
        fixture["pokemon_v2_pokemonsprites"] = json!([]);
        let pokemon: Pokemon = serde_json::from_value(fixture).unwrap();

        assert_eq!(pokemon.front_sprite(), None);
    }

    #[test]
    fn test_stat_name_parsing() {
        assert_eq!("attack".parse::<StatName>().unwrap(), StatName::Attack);
        assert_eq!(
            "special-attack".parse::<StatName>().unwrap(),
            StatName::SpecialAttack
        );
        assert_eq!(
            "special_defense".parse::<StatName>().unwrap(),
            StatName::SpecialDefense
        );
        assert_eq!("HP".parse::<StatName>().unwrap(), StatName::Hp);
        assert!(matches!(
            "luck".parse::<StatName>(),
            Err(ParseError::UnknownStat(_))
        ));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("charmander"), "Charmander");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_type_vocabulary_is_lowercase() {
        for ty in TYPE_VOCABULARY {
            assert_eq!(ty, ty.to_lowercase());
        }
    }
}
