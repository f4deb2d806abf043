//! Port traits for infrastructure boundaries.
//!
//! The engine has a single port: where the content pack comes from. It
//! exists so the built-in pack can be swapped for a file on disk (or a test
//! double) without touching the session.

use std::path::PathBuf;

use tribunal_domain::{ContentPack, DomainError};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid content: {0}")]
    Invalid(#[from] DomainError),
}

// =============================================================================
// Content Port
// =============================================================================

/// Supplies the validated content pack at startup.
#[cfg_attr(test, mockall::automock)]
pub trait ContentSource: Send + Sync {
    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Load and validate the pack.
    fn load(&self) -> Result<ContentPack, ContentError>;
}
