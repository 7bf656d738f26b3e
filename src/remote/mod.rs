//! Content provider contract and remote payload types
//!
//! The catalog is fetched once at startup: a list of categories (each a
//! named list of prompt strings) plus a metadata blob naming which decks
//! are paid. Providers return the complete catalog in one call; there is
//! no pagination.

pub mod bundled;
pub mod http;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// One themed category as delivered by the content store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCategory {
    pub id: String,
    pub name: String,
    /// Prompt texts, in deck order
    pub items: Vec<String>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Catalog-wide metadata blob
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMetadata {
    #[serde(default)]
    pub decks_for_sale: Vec<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Source of the deck catalog, awaited once at session startup
#[allow(async_fn_in_trait)]
pub trait ContentProvider {
    async fn fetch_categories(&self) -> Result<Vec<RemoteCategory>>;
    async fn fetch_metadata(&self) -> Result<RemoteMetadata>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_camel_case() {
        let json = r#"{
            "id": "food-drink",
            "name": "Food & Drink",
            "items": ["Tacos", "Chocolate"],
            "priority": 2
        }"#;
        let cat: RemoteCategory = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id, "food-drink");
        assert_eq!(cat.items.len(), 2);
        assert_eq!(cat.priority, Some(2));
        assert!(cat.image.is_none());
    }

    #[test]
    fn test_metadata_defaults_when_fields_missing() {
        let meta: RemoteMetadata = serde_json::from_str("{}").unwrap();
        assert!(meta.decks_for_sale.is_empty());
        assert!(meta.last_updated.is_none());

        let meta: RemoteMetadata =
            serde_json::from_str(r#"{"decksForSale": ["tv-movies"]}"#).unwrap();
        assert_eq!(meta.decks_for_sale, vec!["tv-movies".to_string()]);
    }
}
