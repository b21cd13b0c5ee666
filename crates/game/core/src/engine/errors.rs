//! Error types for the combination pipeline.

use crate::env::ElementKind;
use crate::error::{ErrorSeverity, GameError};
use crate::state::SelectionState;

/// Errors surfaced by [`super::GameEngine::combine`].
///
/// Both variants leave the session state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombineError {
    /// Combine was requested without both slots filled.
    #[error("select two elements before combining")]
    InvalidState { selection: SelectionState },

    /// The selected pair has no recipe.
    #[error("{first} and {second} do not combine")]
    NoCombination {
        first: ElementKind,
        second: ElementKind,
    },
}

impl GameError for CombineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidState { .. } => ErrorSeverity::Validation,
            Self::NoCombination { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => "COMBINE_INVALID_STATE",
            Self::NoCombination { .. } => "COMBINE_NO_COMBINATION",
        }
    }
}
