//! Ruling and intro card entities - the fixed texts that open and close the trial

use serde::{Deserialize, Serialize};

/// Title screen text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroCard {
    pub title: String,
    pub summary: String,
}

/// The court's decision shown on the Verdict stage.
///
/// The ruling text does not depend on the score; the score is reported
/// alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ruling {
    pub headline: String,
    pub summary: String,
    /// Ways friction hurts (the prosecution's proven points)
    pub harmful_effects: Vec<String>,
    /// Ways friction helps (the defense's proven points)
    pub useful_effects: Vec<String>,
    pub conclusion: String,
}
