//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., [`crate::env::OracleError`],
//! [`crate::progression::DirectorError`]) are defined in their respective
//! modules alongside the operations they guard. This module provides the
//! shared severity classification used to pick a recovery strategy.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: starting an already-started level run
    Validation,

    /// Unexpected state inconsistency. Indicates a bug in the caller.
    ///
    /// Examples: death reported for a monster the director never counted
    Internal,

    /// Unrecoverable error, the session cannot continue.
    ///
    /// Examples: level or monster definition missing from the content tables
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait implemented by all game-core error types.
pub trait GameError: std::error::Error {
    /// Severity of the error for recovery strategies.
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code for logging and diagnostics.
    fn error_code(&self) -> &'static str;
}
