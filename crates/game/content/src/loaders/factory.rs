//! Content factory for building a content bundle from data files.

use std::path::{Path, PathBuf};

use alchemy_core::{ElementCatalog, GameConfig, RuleTable};

use crate::Content;
use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, RecipeLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── elements.ron
/// └── recipes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the element catalog from `elements.ron`.
    pub fn load_catalog(&self) -> LoadResult<ElementCatalog> {
        let path = self.data_dir.join("elements.ron");
        CatalogLoader::load(&path)
    }

    /// Load the recipe table from `recipes.ron`.
    pub fn load_rules(&self) -> LoadResult<RuleTable> {
        let path = self.data_dir.join("recipes.ron");
        RecipeLoader::load(&path)
    }

    /// Load and validate every content file.
    pub fn load_all(&self) -> LoadResult<Content> {
        tracing::debug!("Loading content from {}", self.data_dir.display());

        let config = self.load_config()?;
        let catalog = self.load_catalog()?;
        let rules = self.load_rules()?;

        tracing::info!(
            elements = catalog.iter().count(),
            recipes = rules.len(),
            initial = config.initial_unlocked.len(),
            "Content loaded from {}",
            self.data_dir.display()
        );

        Ok(Content::new(config, catalog, rules))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
