//! The friction trial pack compiled into the binary.

use tribunal_domain::{ContentPack, ContentTables};

use crate::infrastructure::ports::{ContentError, ContentSource};

const FRICTION_TRIAL: &str = include_str!("../../../assets/friction_trial.json");

/// Built-in content - the trial of the force of friction.
pub struct BuiltinContent;

impl BuiltinContent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuiltinContent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for BuiltinContent {
    fn describe(&self) -> String {
        "built-in friction trial".to_string()
    }

    fn load(&self) -> Result<ContentPack, ContentError> {
        parse_pack(FRICTION_TRIAL)
    }
}

/// Parse a JSON document into a validated pack.
///
/// Decoding and validation are kept apart so a well-formed file with broken
/// tables reports `ContentError::Invalid` rather than a JSON error.
pub(crate) fn parse_pack(json: &str) -> Result<ContentPack, ContentError> {
    let tables: ContentTables = serde_json::from_str(json)?;
    Ok(ContentPack::new(tables)?)
}
