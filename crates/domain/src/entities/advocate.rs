//! Advocate entity - One arguing side of the trial

use serde::{Deserialize, Serialize};

use crate::value_objects::Role;

/// The prosecution or the defense, with the arguments it presents.
///
/// Shown on the Prosecution and Defense stages respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Either `Role::Prosecution` or `Role::Defense`
    pub side: Role,
    pub name: String,
    /// What the side claims about friction (e.g., "Harmful friction")
    pub stance: String,
    pub icon: String,
    /// Arguments in presentation order
    pub arguments: Vec<String>,
}
