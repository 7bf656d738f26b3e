//! Load bundled decks from TOML files
//!
//! The shipped deck set lives in `decks/*.toml`; the offline provider
//! serves it when no remote content endpoint is configured.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{GameError, Result};
use crate::remote::{RemoteCategory, RemoteMetadata};

/// Deck TOML files shipped with the game, in default display order
const DECK_FILES: [&str; 7] = [
    "general.toml",
    "food_drink.toml",
    "science_nature.toml",
    "sports_leisure.toml",
    "history_geography.toml",
    "tv_movies.toml",
    "music.toml",
];

#[derive(Debug, Deserialize)]
struct DeckFile {
    id: String,
    name: String,
    #[serde(default)]
    priority: Option<u32>,
    #[serde(default)]
    image: Option<String>,
    prompts: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MetadataFile {
    #[serde(default)]
    decks_for_sale: Vec<String>,
}

/// Load all bundled deck files from the decks/ directory
///
/// Missing files are skipped; malformed files are an error.
pub fn load_bundled_categories(decks_dir: &Path) -> Result<Vec<RemoteCategory>> {
    let mut categories = Vec::new();

    for filename in DECK_FILES {
        let path = decks_dir.join(filename);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            categories.push(parse_deck_toml(&content, filename)?);
        }
    }

    Ok(categories)
}

/// Load the bundled metadata blob, defaulting to empty if absent
pub fn load_bundled_metadata(decks_dir: &Path) -> Result<RemoteMetadata> {
    let path = decks_dir.join("metadata.toml");
    if !path.exists() {
        return Ok(RemoteMetadata::default());
    }

    let content = fs::read_to_string(&path)?;
    let file: MetadataFile = toml::from_str(&content)
        .map_err(|e| GameError::InvalidDeck(format!("metadata.toml: {}", e)))?;

    Ok(RemoteMetadata {
        decks_for_sale: file.decks_for_sale,
        last_updated: None,
    })
}

fn parse_deck_toml(content: &str, filename: &str) -> Result<RemoteCategory> {
    let file: DeckFile = toml::from_str(content)
        .map_err(|e| GameError::InvalidDeck(format!("{}: {}", filename, e)))?;

    if file.prompts.is_empty() {
        return Err(GameError::InvalidDeck(format!(
            "{}: deck '{}' has no prompts",
            filename, file.id
        )));
    }

    Ok(RemoteCategory {
        id: file.id,
        name: file.name,
        items: file.prompts,
        priority: file.priority,
        image: file.image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deck_toml() {
        let toml_str = r#"
id = "food-drink"
name = "Food & Drink"
priority = 1

prompts = [
    "Tacos",
    "Chocolate",
    "Espresso",
]
"#;
        let category = parse_deck_toml(toml_str, "food_drink.toml").unwrap();
        assert_eq!(category.id, "food-drink");
        assert_eq!(category.name, "Food & Drink");
        assert_eq!(category.priority, Some(1));
        assert_eq!(category.items.len(), 3);
    }

    #[test]
    fn test_parse_deck_without_prompts_fails() {
        let toml_str = r#"
id = "empty"
name = "Empty"
prompts = []
"#;
        let result = parse_deck_toml(toml_str, "empty.toml");
        assert!(matches!(result, Err(GameError::InvalidDeck(_))));
    }

    #[test]
    fn test_load_bundled_decks_from_directory() {
        let decks_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("decks");
        let categories = load_bundled_categories(&decks_dir).unwrap();

        assert_eq!(categories.len(), DECK_FILES.len());
        assert!(categories.iter().any(|c| c.id == "general"));
        assert!(categories.iter().all(|c| !c.items.is_empty()));
    }

    #[test]
    fn test_load_bundled_metadata() {
        let decks_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("decks");
        let metadata = load_bundled_metadata(&decks_dir).unwrap();
        assert!(metadata.decks_for_sale.contains(&"tv-movies".to_string()));
    }

    #[test]
    fn test_missing_metadata_defaults_to_empty() {
        let metadata = load_bundled_metadata(Path::new("does-not-exist")).unwrap();
        assert!(metadata.decks_for_sale.is_empty());
    }
}
