//! Game content bundles and loaders.
//!
//! This crate assembles the read-only content a session needs and provides
//! loaders for RON/TOML data files:
//! - Element catalog (data-driven via RON)
//! - Recipe table (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the engine and never appears in game state.
//! All loaders use alchemy-core types directly with serde for RON/TOML
//! deserialization, and run core validation before returning.

mod bundle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::Content;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, RecipeLoader};
