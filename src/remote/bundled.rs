//! Offline content provider serving the bundled deck files

use std::path::PathBuf;

use crate::catalog::loader;
use crate::core::error::Result;
use crate::remote::{ContentProvider, RemoteCategory, RemoteMetadata};

/// Content provider backed by the TOML deck files shipped with the game
#[derive(Debug, Clone)]
pub struct BundledProvider {
    decks_dir: PathBuf,
}

impl BundledProvider {
    pub fn new(decks_dir: impl Into<PathBuf>) -> Self {
        Self {
            decks_dir: decks_dir.into(),
        }
    }
}

impl ContentProvider for BundledProvider {
    async fn fetch_categories(&self) -> Result<Vec<RemoteCategory>> {
        loader::load_bundled_categories(&self.decks_dir)
    }

    async fn fetch_metadata(&self) -> Result<RemoteMetadata> {
        loader::load_bundled_metadata(&self.decks_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[tokio::test]
    async fn test_bundled_provider_serves_shipped_decks() {
        let decks_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("decks");
        let provider = BundledProvider::new(decks_dir);

        let categories = provider.fetch_categories().await.unwrap();
        assert!(!categories.is_empty());

        let metadata = provider.fetch_metadata().await.unwrap();
        assert!(!metadata.decks_for_sale.is_empty());
    }
}
