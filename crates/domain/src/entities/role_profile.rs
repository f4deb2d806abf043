//! Role profile entity - Display data for one selectable persona
//!
//! Profiles feed three screens: the character-select cards, the
//! character-intro briefing and the role badge shown on courtroom screens.

use serde::{Deserialize, Serialize};

use crate::value_objects::Role;

/// Everything the presentation needs to show about one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    pub role: Role,
    /// Short display name (e.g., "Defense"), also used on the badge
    pub label: String,
    /// Opaque icon identifier for the presentation layer
    pub icon: String,
    /// One-line stance shown under the label (e.g., "Useful friction")
    pub tagline: String,
    /// Card body on the character-select screen
    #[serde(default)]
    pub description: String,
    /// What the player is asked to do when playing this role
    #[serde(default)]
    pub mission: String,
    /// Quote shown on the character-intro screen
    #[serde(default)]
    pub quote: String,
    /// Key facts shown on the character-intro screen, in order
    #[serde(default)]
    pub facts: Vec<String>,
    /// Highlight banner on the character-intro screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

/// Icon + caption banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub icon: String,
    pub text: String,
}

/// Label and icon shown on the "You are: ..." badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBadge {
    pub role: Role,
    pub label: String,
    pub icon: String,
}

impl RoleProfile {
    /// Builds the badge for this profile.
    pub fn badge(&self) -> RoleBadge {
        RoleBadge {
            role: self.role,
            label: self.label.clone(),
            icon: self.icon.clone(),
        }
    }
}
