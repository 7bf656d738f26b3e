use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Content fetch failed: {0}")]
    Fetch(String),

    #[error("Store error for key '{key}': {message}")]
    Store { key: String, message: String },

    #[error("Invalid deck data: {0}")]
    InvalidDeck(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
