//! Unified error types for the domain layer
//!
//! Rejected transitions are NOT errors: aggregates report them through their
//! outcome enums (see `events`). `DomainError` covers content validation and
//! text parsing only.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., malformed content tables)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for content that breaks an invariant.
    ///
    /// Use this when the supplied tables cannot drive the state machine:
    /// - A question with fewer than two options
    /// - A correct index outside the option list
    /// - A role table missing one of the three roles
    ///
    /// # Example
    /// ```ignore
    /// if options.len() < 2 {
    ///     return Err(DomainError::validation("Question needs at least two options"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Role {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "judge" => Ok(Self::Judge),
    ///             _ => Err(DomainError::parse(format!("Unknown role: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("question bank is empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: question bank is empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown role: clerk");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown role: clerk");
    }
}
