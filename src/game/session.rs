//! Game session: the single owner of round state
//!
//! Wires the deck catalog, the mutable `GameState`, the preference store
//! and the draw RNG together. There is exactly one logical writer (the
//! caller's event loop); no locking is needed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::DeckCatalog;
use crate::core::error::Result;
use crate::core::types::{Card, CardId, DeckId};
use crate::core::GameConfig;
use crate::game::round::{draw_from, GameState};
use crate::remote::ContentProvider;
use crate::storage::KeyValueStore;

pub struct GameSession {
    catalog: DeckCatalog,
    game: GameState,
    store: Box<dyn KeyValueStore>,
    rng: ChaCha8Rng,
    config: GameConfig,
}

impl GameSession {
    /// Fetch the catalog and build a session.
    ///
    /// Categories and metadata are fetched concurrently and awaited once;
    /// a failed fetch is surfaced instead of leaving an empty catalog
    /// behind. A previously persisted active-deck list, if present and
    /// parseable, overwrites the configured defaults.
    pub async fn load<P: ContentProvider>(
        provider: &P,
        store: Box<dyn KeyValueStore>,
        config: GameConfig,
    ) -> Result<Self> {
        let (categories, metadata) =
            tokio::join!(provider.fetch_categories(), provider.fetch_metadata());
        let catalog = DeckCatalog::hydrate(categories?, &metadata?);

        tracing::info!(
            "Hydrated {} decks ({} cards)",
            catalog.decks().len(),
            catalog.card_count()
        );

        let mut session = Self::with_catalog(catalog, store, config);
        session.restore_active_decks();
        Ok(session)
    }

    /// Build a session around an already hydrated catalog, with an
    /// entropy-seeded draw RNG
    pub fn with_catalog(
        catalog: DeckCatalog,
        store: Box<dyn KeyValueStore>,
        config: GameConfig,
    ) -> Self {
        Self::with_rng(catalog, store, config, ChaCha8Rng::from_entropy())
    }

    /// Build a session with an explicit RNG, for reproducible draws
    pub fn with_rng(
        catalog: DeckCatalog,
        store: Box<dyn KeyValueStore>,
        config: GameConfig,
        rng: ChaCha8Rng,
    ) -> Self {
        let game = GameState::new(&config);
        Self {
            catalog,
            game,
            store,
            rng,
            config,
        }
    }

    /// Reseed the draw RNG, for reproducible sessions
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn restore_active_decks(&mut self) {
        match self.store.get(&self.config.active_decks_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => {
                    tracing::debug!("Restored {} active decks", ids.len());
                    self.game
                        .set_active_decks(ids.into_iter().map(DeckId::new).collect());
                }
                Err(e) => {
                    tracing::warn!("Stored active-deck list unreadable, keeping defaults: {}", e);
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Preference store unavailable, keeping defaults: {}", e);
            }
        }
    }

    pub fn catalog(&self) -> &DeckCatalog {
        &self.catalog
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current playable pool, derived from catalog and active decks
    pub fn playable_cards(&self) -> Vec<CardId> {
        self.catalog.playable_cards(&self.game.active_decks)
    }

    pub fn start_new_round(&mut self) {
        self.game.start_new_round(self.config.default_round_secs);
        tracing::debug!(
            "New round started, {} seconds on the clock",
            self.game.time_remaining
        );
    }

    /// Draw the next card, or `None` when the round is over
    pub fn draw_card(&mut self) -> Option<Card> {
        draw_from(&mut self.game, &self.catalog, &mut self.rng)
    }

    /// Replace the active-deck set and persist it.
    ///
    /// The in-memory state is updated unconditionally; the returned error
    /// only means the preference will not survive a restart, and the
    /// caller decides whether to tell the player.
    pub fn set_active_decks(&mut self, deck_ids: Vec<DeckId>) -> Result<()> {
        let encoded = serde_json::to_string(
            &deck_ids.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
        )?;
        self.game.set_active_decks(deck_ids);
        self.store.set(&self.config.active_decks_key, &encoded)
    }

    pub fn set_timer_seconds(&mut self, seconds: u32) {
        self.game.set_timer_seconds(seconds);
    }

    /// Count the round timer down one second; returns the remainder
    pub fn tick_timer(&mut self) -> u32 {
        self.game.tick_timer()
    }

    pub fn mark_nailed(&mut self, prompt: impl Into<String>) {
        self.game.mark_nailed(prompt);
    }

    pub fn mark_missed(&mut self, prompt: impl Into<String>) {
        self.game.mark_missed(prompt);
    }
}
