//! Common error infrastructure for alchemy-core.
//!
//! This module provides shared types and traits used across all error types in alchemy-core.
//! Domain-specific errors (e.g., `CombineError`, `RuleTableError`) are defined in their
//! respective modules alongside the operations they validate.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: the player can simply try something else
/// - **Validation**: the caller sent a request it should have disabled
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: content is broken and a session cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with a different input.
    ///
    /// Examples: the selected pair has no recipe
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: combine requested with an empty slot
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a stored selection that no click sequence can produce
    Internal,

    /// Fatal error - cannot continue.
    ///
    /// Examples: conflicting recipes, incomplete element catalog
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all alchemy-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
