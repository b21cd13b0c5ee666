//! Recipe table loader.

use std::path::Path;

use alchemy_core::{CombinationRule, RuleTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Recipe list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBook {
    pub recipes: Vec<CombinationRule>,
}

/// Loader for the recipe table from RON files.
pub struct RecipeLoader;

impl RecipeLoader {
    /// Load the recipe table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a RecipeBook
    pub fn load(path: &Path) -> LoadResult<RuleTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a recipe table from RON text.
    ///
    /// Duplicate or conflicting recipes for the same pair are rejected.
    pub fn parse(content: &str) -> LoadResult<RuleTable> {
        let book: RecipeBook = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe RON: {}", e))?;

        RuleTable::new(book.recipes).map_err(|e| anyhow::anyhow!("Invalid recipe table: {}", e))
    }
}
