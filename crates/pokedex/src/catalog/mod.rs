use crate::prelude::*;
use colored::Color;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use pokedex_core::model::Pokemon;

pub mod list;
pub mod read;
pub mod types;

// Re-export public data functions
pub use list::list_data;
pub use read::read_data;

const GRAPHQL_API_BASE: &str = "https://beta.pokeapi.co/graphql/v1beta";

/// Upstream cap on how many records one catalog query may fetch.
pub const MAX_FETCH: usize = 100;

/// Catalog list query with a caller-supplied record cap.
const CATALOG_QUERY: &str = r#"
query getPokemons($limit: Int!) {
  pokemon_v2_pokemon(limit: $limit) {
    id
    base_experience
    height
    is_default
    name
    order
    pokemon_v2_pokemonsprites {
      sprites
    }
    pokemon_v2_pokemontypes {
      pokemon_v2_type {
        name
      }
      type_id
    }
    pokemon_v2_pokemonstats {
      pokemon_v2_stat {
        name
      }
      base_stat
      stat_id
    }
  }
}
"#;

/// Single-item detail query by primary key.
const DETAIL_BY_ID_QUERY: &str = r#"
query getPokemonDetails($id: Int!) {
  pokemon_v2_pokemon_by_pk(id: $id) {
    id
    name
    base_experience
    height
    is_default
    order
    pokemon_v2_pokemonsprites {
      sprites
    }
    pokemon_v2_pokemontypes {
      pokemon_v2_type {
        name
      }
      type_id
    }
    pokemon_v2_pokemonstats {
      pokemon_v2_stat {
        name
      }
      base_stat
      stat_id
    }
  }
}
"#;

/// Single-item detail query by exact name.
const DETAIL_BY_NAME_QUERY: &str = r#"
query getPokemonByName($name: String!) {
  pokemon_v2_pokemon(where: {name: {_eq: $name}}, limit: 1) {
    id
    name
    base_experience
    height
    is_default
    order
    pokemon_v2_pokemonsprites {
      sprites
    }
    pokemon_v2_pokemontypes {
      pokemon_v2_type {
        name
      }
      type_id
    }
    pokemon_v2_pokemonstats {
      pokemon_v2_stat {
        name
      }
      base_stat
      stat_id
    }
  }
}
"#;

// Shared utility functions
pub fn get_api_base() -> &'static str {
    GRAPHQL_API_BASE
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    #[serde(rename = "pokemon_v2_pokemon")]
    pokemon: Vec<Pokemon>,
}

#[derive(Debug, Deserialize)]
struct DetailData {
    #[serde(rename = "pokemon_v2_pokemon_by_pk")]
    pokemon: Option<Pokemon>,
}

/// Execute one GraphQL document against the catalog endpoint.
async fn execute<T: DeserializeOwned>(
    client: &reqwest::Client,
    query: &str,
    variables: serde_json::Value,
) -> Result<T> {
    let body = serde_json::json!({
        "query": query,
        "variables": variables,
    });

    let response = client
        .post(get_api_base())
        .json(&body)
        .send()
        .await
        .map_err(|e| eyre!(Error::Network(f!("failed to reach the catalog API: {e}"))))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!(Error::Api(f!("request failed [{status}]: {body}"))));
    }

    let body_text = response
        .text()
        .await
        .map_err(|e| eyre!("Failed to read response body: {}", e))?;

    let envelope: GraphQlResponse<T> = serde_json::from_str(&body_text)
        .map_err(|e| eyre!("Failed to parse catalog API response: {}", e))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(eyre!(Error::Api(messages.join("; "))));
    }

    envelope
        .data
        .ok_or_else(|| eyre!("Catalog API response carried no data"))
}

/// Fetch the catalog list, capped at `limit` records.
pub async fn fetch_catalog(client: &reqwest::Client, limit: usize) -> Result<Vec<Pokemon>> {
    let data: CatalogData = execute(
        client,
        CATALOG_QUERY,
        serde_json::json!({ "limit": limit.clamp(1, MAX_FETCH) }),
    )
    .await?;

    Ok(data.pokemon)
}

/// Fetch one item by primary key.
pub async fn fetch_by_id(client: &reqwest::Client, id: u32) -> Result<Option<Pokemon>> {
    let data: DetailData =
        execute(client, DETAIL_BY_ID_QUERY, serde_json::json!({ "id": id })).await?;

    Ok(data.pokemon)
}

/// Fetch one item by exact name.
pub async fn fetch_by_name(client: &reqwest::Client, name: &str) -> Result<Option<Pokemon>> {
    let data: CatalogData = execute(
        client,
        DETAIL_BY_NAME_QUERY,
        serde_json::json!({ "name": name }),
    )
    .await?;

    Ok(data.pokemon.into_iter().next())
}

/// How a `read` argument resolves against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(u32),
    Name(String),
}

/// Resolve user input to a lookup: a numeric argument is a primary key,
/// anything else is an exact (lowercased) name.
pub fn extract_lookup(input: &str) -> Result<Lookup> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(eyre!(Error::InvalidArgument(
            "empty item id or name".to_string()
        )));
    }

    if let Ok(id) = trimmed.parse::<u32>() {
        return Ok(Lookup::Id(id));
    }

    Ok(Lookup::Name(trimmed.to_lowercase()))
}

/// Color used for a type tag, matching the original palette.
pub fn type_color(ty: &str) -> Color {
    match ty {
        "fire" | "fighting" => Color::Red,
        "water" | "dragon" => Color::Blue,
        "grass" | "bug" => Color::Green,
        "electric" | "ground" => Color::Yellow,
        "ghost" | "poison" | "psychic" | "fairy" => Color::Magenta,
        "ice" | "flying" => Color::Cyan,
        "rock" | "steel" => Color::BrightBlack,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_lookup_numeric_is_id() {
        assert_eq!(extract_lookup("25").unwrap(), Lookup::Id(25));
        assert_eq!(extract_lookup(" 4 ").unwrap(), Lookup::Id(4));
    }

    #[test]
    fn test_extract_lookup_text_is_name() {
        assert_eq!(
            extract_lookup("pikachu").unwrap(),
            Lookup::Name("pikachu".to_string())
        );
        assert_eq!(
            extract_lookup("Pikachu").unwrap(),
            Lookup::Name("pikachu".to_string())
        );
    }

    #[test]
    fn test_extract_lookup_rejects_empty() {
        assert!(extract_lookup("").is_err());
        assert!(extract_lookup("   ").is_err());
    }

    #[test]
    fn test_type_color_known_and_unknown() {
        assert_eq!(type_color("fire"), Color::Red);
        assert_eq!(type_color("water"), Color::Blue);
        assert_eq!(type_color("normal"), Color::White);
        assert_eq!(type_color("not-a-type"), Color::White);
    }
}
