//! Detail output for a single catalog item

use serde::Serialize;

use crate::model::{capitalize, Pokemon, StatName};

/// One stat line in the detail view
#[derive(Debug, Serialize, Clone)]
pub struct StatLine {
    pub name: String,
    pub label: String,
    pub value: u32,
}

/// Complete detail output for one catalog item
#[derive(Debug, Serialize, Clone)]
pub struct DetailOutput {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub base_experience: Option<u32>,
    pub height: Option<u32>,
    pub is_default: bool,
    pub order: Option<i32>,
    pub types: Vec<String>,
    pub stats: Vec<StatLine>,
    pub sprite: Option<String>,
    pub artwork: Option<String>,
}

/// Shape a fetched item into detail output.
///
/// All six stats are always emitted, in the fixed stat order; stats the
/// record does not carry read as 0.
pub fn transform_detail(pokemon: &Pokemon) -> DetailOutput {
    let stats = StatName::ALL
        .iter()
        .map(|stat| StatLine {
            name: stat.as_str().to_string(),
            label: stat.label().to_string(),
            value: pokemon.stat_value(*stat),
        })
        .collect();

    DetailOutput {
        id: pokemon.id,
        name: pokemon.name.clone(),
        display_name: capitalize(&pokemon.name),
        base_experience: pokemon.base_experience,
        height: pokemon.height,
        is_default: pokemon.is_default,
        order: pokemon.order,
        types: pokemon
            .type_names()
            .iter()
            .map(|t| t.to_string())
            .collect(),
        stats,
        sprite: pokemon.front_sprite(),
        artwork: pokemon.artwork_sprite(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Pokemon {
        serde_json::from_value(json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "is_default": true,
            "order": 35,
            "pokemon_v2_pokemonsprites": [
                {
                    "sprites": {
                        "front_default": "https://img.example/25.png",
                        "other": {
                            "official-artwork": {
                                "front_default": "https://img.example/art/25.png"
                            }
                        }
                    }
                }
            ],
            "pokemon_v2_pokemontypes": [
                { "pokemon_v2_type": { "name": "electric" }, "type_id": 13 }
            ],
            "pokemon_v2_pokemonstats": [
                { "pokemon_v2_stat": { "name": "hp" }, "base_stat": 35, "stat_id": 1 },
                { "pokemon_v2_stat": { "name": "attack" }, "base_stat": 55, "stat_id": 2 },
                { "pokemon_v2_stat": { "name": "defense" }, "base_stat": 40, "stat_id": 3 },
                { "pokemon_v2_stat": { "name": "special-attack" }, "base_stat": 50, "stat_id": 4 },
                { "pokemon_v2_stat": { "name": "special-defense" }, "base_stat": 50, "stat_id": 5 },
                { "pokemon_v2_stat": { "name": "speed" }, "base_stat": 90, "stat_id": 6 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_transform_detail_basic() {
        let output = transform_detail(&fixture());

        assert_eq!(output.id, 25);
        assert_eq!(output.name, "pikachu");
        assert_eq!(output.display_name, "Pikachu");
        assert_eq!(output.base_experience, Some(112));
        assert_eq!(output.types, vec!["electric"]);
        assert_eq!(output.sprite.as_deref(), Some("https://img.example/25.png"));
        assert_eq!(
            output.artwork.as_deref(),
            Some("https://img.example/art/25.png")
        );
    }

    #[test]
    fn test_transform_detail_emits_all_six_stats_in_order() {
        let output = transform_detail(&fixture());

        let names: Vec<&str> = output.stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "hp",
                "attack",
                "defense",
                "special-attack",
                "special-defense",
                "speed"
            ]
        );
        assert_eq!(output.stats[5].value, 90);
        assert_eq!(output.stats[5].label, "Spe");
    }

    #[test]
    fn test_transform_detail_missing_stats_read_zero() {
        let mut pokemon = fixture();
        pokemon.stats.truncate(1);

        let output = transform_detail(&pokemon);

        assert_eq!(output.stats.len(), 6);
        assert_eq!(output.stats[0].value, 35);
        assert!(output.stats[1..].iter().all(|s| s.value == 0));
    }

    #[test]
    fn test_transform_detail_serializes() {
        let output = transform_detail(&fixture());
        let json = serde_json::to_string_pretty(&output).unwrap();

        assert!(json.contains("\"display_name\": \"Pikachu\""));
        assert!(json.contains("\"artwork\""));
    }
}
