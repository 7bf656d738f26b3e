//! Game configuration with documented constants

/// Configuration for a game session
///
/// Defaults mirror the shipped app; override per session before
/// constructing the `GameSession`.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Round length in seconds used when the timer hits zero
    ///
    /// `start_new_round` keeps a positive `time_remaining` untouched and
    /// falls back to this value otherwise.
    pub default_round_secs: u32,

    /// Deck ids active before any stored preference is loaded
    pub default_active_decks: Vec<String>,

    /// Key under which the active-deck id list is persisted
    pub active_decks_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_round_secs: 60,
            default_active_decks: vec![
                "general".into(),
                "food-drink".into(),
                "science-nature".into(),
                "sports-leisure".into(),
                "history-geography".into(),
                "tv-movies".into(),
                "music".into(),
            ],
            active_decks_key: "active_decks".into(),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.default_round_secs == 0 {
            return Err("default_round_secs must be positive".into());
        }
        if self.active_decks_key.is_empty() {
            return Err("active_decks_key must not be empty".into());
        }
        Ok(())
    }
}
