//! Round state and the card-draw algorithm
//!
//! One `GameState` exists per session and is mutated only through the
//! operations below. The implicit per-round state machine: Idle to
//! Playing on `start_new_round`, Playing to Playing on each successful
//! draw, Playing to RoundOver when `draw_from` finds no candidates, and
//! back to Playing on the next `start_new_round`.

use ahash::AHashSet;
use rand::Rng;

use crate::catalog::DeckCatalog;
use crate::core::types::{Card, CardId, DeckId};
use crate::core::GameConfig;

/// Mutable per-session round state.
///
/// The playable-card pool is deliberately not stored here; it is derived
/// from the catalog and `active_decks` on demand (see
/// `DeckCatalog::playable_cards`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    /// Count of cards drawn this round; always equals `drawn_cards.len()`
    pub card_index: u32,
    /// Seconds left on the round timer; zero means "use the default next round"
    pub time_remaining: u32,
    /// Decks eligible to supply cards; order preserved for display
    pub active_decks: Vec<DeckId>,
    /// Card ids already shown this round, in draw order, no duplicates
    pub drawn_cards: Vec<CardId>,
    pub nailed_items: Vec<String>,
    pub missed_items: Vec<String>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            card_index: 0,
            time_remaining: config.default_round_secs,
            active_decks: config
                .default_active_decks
                .iter()
                .map(|id| DeckId::new(id.clone()))
                .collect(),
            drawn_cards: Vec::new(),
            nailed_items: Vec::new(),
            missed_items: Vec::new(),
        }
    }

    /// Reset for a fresh round.
    ///
    /// Score, draw history and outcome lists are cleared. A positive
    /// timer is preserved (the player may have configured it); a zero
    /// timer falls back to `default_secs`.
    pub fn start_new_round(&mut self, default_secs: u32) {
        self.score = 0;
        self.card_index = 0;
        self.drawn_cards.clear();
        self.nailed_items.clear();
        self.missed_items.clear();
        if self.time_remaining == 0 {
            self.time_remaining = default_secs;
        }
    }

    /// Replace the active-deck set.
    ///
    /// Ids are not validated: unknown decks are accepted and simply
    /// contribute zero playable cards.
    pub fn set_active_decks(&mut self, deck_ids: Vec<DeckId>) {
        self.active_decks = deck_ids;
    }

    /// Set the round timer directly; zero is accepted and triggers the
    /// default-length branch at the next `start_new_round`
    pub fn set_timer_seconds(&mut self, seconds: u32) {
        self.time_remaining = seconds;
    }

    /// Count down one second, saturating at zero; returns the remainder
    pub fn tick_timer(&mut self) -> u32 {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining
    }

    /// Record a correct guess: one point, prompt kept for the summary
    pub fn mark_nailed(&mut self, prompt: impl Into<String>) {
        self.score += 1;
        self.nailed_items.push(prompt.into());
    }

    /// Record a missed card; no score change
    pub fn mark_missed(&mut self, prompt: impl Into<String>) {
        self.missed_items.push(prompt.into());
    }
}

/// Draw the next card: a uniform random pick from the playable pool minus
/// the cards already drawn this round.
///
/// Returns `None` when the pool is exhausted, which is the round-over
/// signal, not an error. On success the id is appended to `drawn_cards`
/// and `card_index` is incremented before the card is returned.
pub fn draw_from(
    state: &mut GameState,
    catalog: &DeckCatalog,
    rng: &mut impl Rng,
) -> Option<Card> {
    let drawn: AHashSet<&CardId> = state.drawn_cards.iter().collect();
    let candidates: Vec<CardId> = catalog
        .playable_cards(&state.active_decks)
        .into_iter()
        .filter(|id| !drawn.contains(id))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let picked = candidates[rng.gen_range(0..candidates.len())].clone();
    let card = catalog.card(&picked)?.clone();

    state.drawn_cards.push(picked);
    state.card_index += 1;

    Some(card)
}
