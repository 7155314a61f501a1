//! Common error infrastructure for simon-core.
//!
//! The game rules themselves never fail: a wrong move is an ordinary state
//! transition reported through [`crate::GameEvent::PlayerLost`]. Errors in this
//! crate only describe broken invariants discovered while validating state.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Unexpected state inconsistency. These indicate bugs.
    Internal,

    /// Game state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the state cannot be trusted any more.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all simon-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_severity_is_fatal() {
        assert!(ErrorSeverity::Fatal.is_fatal());
        assert!(!ErrorSeverity::Internal.is_fatal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
