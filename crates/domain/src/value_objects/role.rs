//! Player role enum
//!
//! The persona chosen on the character-select screen. An unset role is
//! modelled as `Option<Role>::None` on the playthrough; `Role::or_default_display`
//! is the only place where the Judge fallback is applied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A selectable courtroom persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Argues that friction is harmful
    Prosecution,
    /// Argues that friction is useful
    Defense,
    /// Weighs both sides
    Judge,
}

impl Role {
    /// All roles, in character-select order.
    pub const ALL: [Role; 3] = [Role::Prosecution, Role::Defense, Role::Judge];

    /// Role used for display when none has been chosen yet.
    pub const DISPLAY_FALLBACK: Role = Role::Judge;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prosecution => "prosecution",
            Self::Defense => "defense",
            Self::Judge => "judge",
        }
    }

    /// Resolve an optional role for display purposes.
    ///
    /// The result must never be written back into playthrough state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tribunal_domain::Role;
    ///
    /// assert_eq!(Role::or_default_display(None), Role::Judge);
    /// assert_eq!(Role::or_default_display(Some(Role::Defense)), Role::Defense);
    /// ```
    #[inline]
    pub fn or_default_display(role: Option<Role>) -> Role {
        role.unwrap_or(Self::DISPLAY_FALLBACK)
    }

    /// Returns true for the two arguing sides (witnesses testify for one of these).
    #[inline]
    pub fn is_side(self) -> bool {
        matches!(self, Self::Prosecution | Self::Defense)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prosecution" => Ok(Self::Prosecution),
            "defense" | "defence" => Ok(Self::Defense),
            "judge" => Ok(Self::Judge),
            _ => Err(DomainError::parse(format!("Unknown role: {}", s))),
        }
    }
}
