//! Content validation errors.
//!
//! Raised while building the element catalog or rule table. A session cannot
//! start with broken content, so every variant is fatal.

use crate::error::{ErrorSeverity, GameError};

use super::elements::ElementKind;

/// Errors raised while building an [`super::ElementCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// The same element was defined more than once.
    #[error("element '{0}' is defined more than once")]
    DuplicateElement(ElementKind),

    /// An element has no definition.
    #[error("element '{0}' has no definition")]
    MissingElement(ElementKind),

    /// Two elements share a display name, ignoring case.
    #[error("elements '{first}' and '{second}' are both named '{name}'")]
    DuplicateName {
        name: String,
        first: ElementKind,
        second: ElementKind,
    },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateElement(_) => "CATALOG_DUPLICATE_ELEMENT",
            Self::MissingElement(_) => "CATALOG_MISSING_ELEMENT",
            Self::DuplicateName { .. } => "CATALOG_DUPLICATE_NAME",
        }
    }
}

/// Errors raised while building a [`super::RuleTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleTableError {
    /// The same recipe appears twice with the same result.
    #[error("recipe {a} + {b} = {result} is listed more than once")]
    DuplicateRule {
        a: ElementKind,
        b: ElementKind,
        result: ElementKind,
    },

    /// Two recipes for the same pair produce different results.
    #[error("recipe {a} + {b} produces both {existing} and {conflicting}")]
    ConflictingRule {
        a: ElementKind,
        b: ElementKind,
        existing: ElementKind,
        conflicting: ElementKind,
    },

    /// Both ingredients are the same element.
    ///
    /// The two selection slots never hold the same element, so such a rule
    /// could never fire.
    #[error("recipe {element} + {element} can never be selected")]
    SelfCombination { element: ElementKind },
}

impl GameError for RuleTableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateRule { .. } => "RULES_DUPLICATE_RULE",
            Self::ConflictingRule { .. } => "RULES_CONFLICTING_RULE",
            Self::SelfCombination { .. } => "RULES_SELF_COMBINATION",
        }
    }
}
