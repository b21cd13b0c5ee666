//! Deterministic element-combination rules and session state.
//!
//! `alchemy-core` defines the canonical content types (element catalog,
//! recipe table), the two-slot selection state machine and the engine that
//! applies user actions. All state mutation flows through
//! [`engine::GameEngine`]; shells and loaders depend on the types re-exported
//! here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::GameConfig;
pub use engine::{Action, Combination, CombineError, ExecutionOutcome, GameEngine};
pub use env::{
    CatalogError, CombinationRule, ElementCatalog, ElementDef, ElementKind, RecipeOracle,
    RuleTable, RuleTableError,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    GameState, LastResult, Recipe, SelectionError, SelectionPhase, SelectionState, StateDelta,
    UnlockedSet,
};
