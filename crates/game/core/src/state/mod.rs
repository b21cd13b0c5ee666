//! Session state representation.
//!
//! This module owns the selection slots, the unlocked set and the last
//! combination result. Shells clone or query this state but mutate it
//! exclusively through the engine.
pub mod delta;
mod error;
mod selection;
mod unlocked;

pub use delta::StateDelta;
pub use error::SelectionError;
pub use selection::{SelectionPhase, SelectionState};
pub use unlocked::UnlockedSet;

use crate::config::GameConfig;
use crate::env::ElementKind;

/// Ingredients of a combination in the order they were selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub first: ElementKind,
    pub second: ElementKind,
}

impl Recipe {
    pub const fn new(first: ElementKind, second: ElementKind) -> Self {
        Self { first, second }
    }
}

/// Most recent successful combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastResult {
    pub recipe: Recipe,
    pub result: ElementKind,
}

/// Complete in-memory state of one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub selection: SelectionState,
    pub unlocked: UnlockedSet,
    /// Cleared by every selection.
    pub last_result: Option<LastResult>,
}

impl GameState {
    /// Fresh session with the configured starting elements unlocked.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            selection: SelectionState::empty(),
            unlocked: config.initial_unlocked.iter().copied().collect(),
            last_result: None,
        }
    }

    pub fn is_unlocked(&self, element: ElementKind) -> bool {
        self.unlocked.contains(element)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
