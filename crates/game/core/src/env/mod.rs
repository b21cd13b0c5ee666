//! Read-only game content.
//!
//! The element catalog and the recipe table are built once when a session is
//! assembled and never change afterwards. The engine only sees recipes through
//! the [`RecipeOracle`] trait so shells can swap in loaded content.
mod elements;
mod error;
mod recipes;

pub use elements::{ElementCatalog, ElementDef, ElementKind};
pub use error::{CatalogError, RuleTableError};
pub use recipes::{CombinationRule, RecipeOracle, RuleTable};
