//! Deck catalog: hydration from remote content and card lookup
//!
//! The catalog is built once from the fetched categories and metadata and
//! is immutable for the rest of the session. The playable-card pool is a
//! pure function of the catalog and the active-deck set, computed on
//! demand rather than cached, so it can never go stale.

pub mod loader;

use ahash::{AHashMap, AHashSet};

use crate::core::types::{Card, CardId, Deck, DeckId};
use crate::remote::{RemoteCategory, RemoteMetadata};

/// Immutable session catalog of decks, sorted by display priority
#[derive(Debug, Clone, Default)]
pub struct DeckCatalog {
    decks: Vec<Deck>,
    index: AHashMap<DeckId, usize>,
}

impl DeckCatalog {
    /// Build the catalog from fetched categories and metadata.
    ///
    /// Priority defaults to the category's fetch position; decks are
    /// sorted by priority (stable, so ties keep fetch order). A category
    /// repeating an earlier id is dropped.
    pub fn hydrate(categories: Vec<RemoteCategory>, metadata: &RemoteMetadata) -> Self {
        let mut decks: Vec<Deck> = Vec::with_capacity(categories.len());
        let mut seen: AHashSet<String> = AHashSet::new();

        for (position, category) in categories.into_iter().enumerate() {
            if !seen.insert(category.id.clone()) {
                tracing::warn!("Duplicate deck id '{}' in catalog, skipping", category.id);
                continue;
            }

            let deck_id = DeckId::new(category.id);
            let cards = category
                .items
                .into_iter()
                .enumerate()
                .map(|(i, prompt)| Card {
                    id: CardId::new(deck_id.clone(), i as u32),
                    prompt,
                    deck_id: deck_id.clone(),
                })
                .collect();

            decks.push(Deck {
                for_sale: metadata.decks_for_sale.contains(&deck_id.0),
                id: deck_id,
                name: category.name,
                cards,
                priority: category.priority.unwrap_or(position as u32),
                image: category.image,
            });
        }

        decks.sort_by_key(|d| d.priority);

        let index = decks
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();

        Self { decks, index }
    }

    /// All decks in display order
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Total cards across all decks
    pub fn card_count(&self) -> usize {
        self.decks.iter().map(|d| d.cards.len()).sum()
    }

    pub fn deck(&self, id: &DeckId) -> Option<&Deck> {
        self.index.get(id).map(|&i| &self.decks[i])
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.deck(&id.deck)?.cards.get(id.index as usize)
    }

    /// Card ids eligible for drawing given the active decks.
    ///
    /// Pure function of the catalog and the active set: ids are returned
    /// in catalog order (deck priority, then card position) with no
    /// duplicates. Unknown deck ids contribute nothing.
    pub fn playable_cards(&self, active_decks: &[DeckId]) -> Vec<CardId> {
        let active: AHashSet<&DeckId> = active_decks.iter().collect();

        self.decks
            .iter()
            .filter(|deck| active.contains(&deck.id))
            .flat_map(|deck| deck.cards.iter().map(|card| card.id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, items: &[&str], priority: Option<u32>) -> RemoteCategory {
        RemoteCategory {
            id: id.to_string(),
            name: id.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            priority,
            image: None,
        }
    }

    fn sample_catalog() -> DeckCatalog {
        let categories = vec![
            category("general", &["The Beach", "An Airplane", "A Sandwich"], None),
            category("food-drink", &["Tacos", "Chocolate", "Espresso"], None),
        ];
        let metadata = RemoteMetadata {
            decks_for_sale: vec!["food-drink".to_string()],
            last_updated: None,
        };
        DeckCatalog::hydrate(categories, &metadata)
    }

    #[test]
    fn test_hydrate_builds_composite_card_ids() {
        let catalog = sample_catalog();
        let general = catalog.deck(&DeckId::from("general")).unwrap();

        assert_eq!(general.cards.len(), 3);
        assert_eq!(general.cards[0].id, CardId::new(DeckId::from("general"), 0));
        assert_eq!(general.cards[2].id, CardId::new(DeckId::from("general"), 2));
        assert_eq!(general.cards[1].prompt, "An Airplane");
    }

    #[test]
    fn test_hydrate_flags_for_sale_decks() {
        let catalog = sample_catalog();
        assert!(!catalog.deck(&DeckId::from("general")).unwrap().for_sale);
        assert!(catalog.deck(&DeckId::from("food-drink")).unwrap().for_sale);
    }

    #[test]
    fn test_hydrate_sorts_by_priority() {
        let categories = vec![
            category("last", &["a"], Some(9)),
            category("first", &["b"], Some(1)),
            category("middle", &["c"], Some(5)),
        ];
        let catalog = DeckCatalog::hydrate(categories, &RemoteMetadata::default());

        let order: Vec<&str> = catalog.decks().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["first", "middle", "last"]);
    }

    #[test]
    fn test_hydrate_skips_duplicate_deck_ids() {
        let categories = vec![
            category("general", &["a", "b"], None),
            category("general", &["c"], None),
        ];
        let catalog = DeckCatalog::hydrate(categories, &RemoteMetadata::default());

        assert_eq!(catalog.decks().len(), 1);
        assert_eq!(catalog.deck(&DeckId::from("general")).unwrap().cards.len(), 2);
    }

    #[test]
    fn test_playable_cards_union_of_active_decks() {
        let catalog = sample_catalog();

        let playable = catalog.playable_cards(&[DeckId::from("general")]);
        assert_eq!(
            playable,
            vec![
                CardId::new(DeckId::from("general"), 0),
                CardId::new(DeckId::from("general"), 1),
                CardId::new(DeckId::from("general"), 2),
            ]
        );

        let both = catalog.playable_cards(&[DeckId::from("general"), DeckId::from("food-drink")]);
        assert_eq!(both.len(), 6);
    }

    #[test]
    fn test_playable_cards_unknown_deck_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.playable_cards(&[DeckId::from("x")]).is_empty());
    }

    #[test]
    fn test_playable_cards_ignores_repeated_active_ids() {
        let catalog = sample_catalog();
        let playable =
            catalog.playable_cards(&[DeckId::from("general"), DeckId::from("general")]);
        assert_eq!(playable.len(), 3);
    }

    #[test]
    fn test_card_lookup() {
        let catalog = sample_catalog();

        let id = CardId::new(DeckId::from("food-drink"), 1);
        assert_eq!(catalog.card(&id).unwrap().prompt, "Chocolate");

        let missing = CardId::new(DeckId::from("food-drink"), 99);
        assert!(catalog.card(&missing).is_none());
    }
}
