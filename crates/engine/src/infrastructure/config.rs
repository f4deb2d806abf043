//! Engine configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TRIBUNAL_CONTENT_PATH` | JSON content file | built-in pack |
//! | `TRIBUNAL_OUTPUT` | `text` or `json` | `text` |
//!
//! `RUST_LOG` is read by the tracing subscriber, not here.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONTENT_PATH_VAR: &str = "TRIBUNAL_CONTENT_PATH";
pub const OUTPUT_VAR: &str = "TRIBUNAL_OUTPUT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be 'text' or 'json', got '{value}'")]
    InvalidOutputFormat { var: &'static str, value: String },
}

/// How views are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable screens
    #[default]
    Text,
    /// One JSON `ActionResponse` per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutputFormat {
                var: OUTPUT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub content_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let content_path = read(CONTENT_PATH_VAR).map(PathBuf::from);
        let output = read(OUTPUT_VAR)
            .map(|value| value.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            content_path,
            output,
        })
    }
}

/// Load `.env.local` then `.env` from `dir`, ignoring missing files.
///
/// Variables already set in the process win over both files, and
/// `.env.local` wins over `.env`.
pub fn load_dotenv_from(dir: &Path) {
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
