//! Witness entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Role;

/// A witness called on the Witnesses stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Witness {
    /// Stable identifier (e.g., "bearing")
    pub id: String,
    pub name: String,
    pub icon: String,
    pub testimony: String,
    /// Side this witness testifies for (Prosecution or Defense)
    pub side: Role,
}
