//! Errors raised when rebuilding state from outside the engine.

use crate::env::ElementKind;
use crate::error::{ErrorSeverity, GameError};

/// Slot contents that no sequence of selections can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("second slot holds {second} while the first slot is empty")]
    SecondWithoutFirst { second: ElementKind },

    #[error("both slots hold {element}")]
    SameElement { element: ElementKind },
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SecondWithoutFirst { .. } => "SELECTION_SECOND_WITHOUT_FIRST",
            Self::SameElement { .. } => "SELECTION_SAME_ELEMENT",
        }
    }
}
