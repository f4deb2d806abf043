//! Presentation stage enum
//!
//! One value per screen of the courtroom walkthrough. Exactly one stage is
//! active at a time; the transition graph lives on the `Playthrough`
//! aggregate, this type only knows the order and the labelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Number of numbered courtroom steps (Prosecution through Verdict).
pub const COURTROOM_STEPS: u8 = 5;

/// A screen of the walkthrough.
///
/// # Stage Order
///
/// ```text
/// Intro -> CharacterSelect -> CharacterIntro -> Prosecution -> Defense
///       -> Witnesses -> Quiz -> Verdict -> (restart) Intro
/// ```
///
/// # Examples
///
/// ```
/// use tribunal_domain::Stage;
///
/// assert_eq!(Stage::default(), Stage::Intro);
/// assert_eq!(Stage::Defense.courtroom_step(), Some(2));
/// assert_eq!(Stage::CharacterSelect.courtroom_step(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    Intro,
    CharacterSelect,
    CharacterIntro,
    Prosecution,
    Defense,
    Witnesses,
    Quiz,
    Verdict,
}

impl Stage {
    /// All stages in walkthrough order.
    pub const ALL: [Stage; 8] = [
        Stage::Intro,
        Stage::CharacterSelect,
        Stage::CharacterIntro,
        Stage::Prosecution,
        Stage::Defense,
        Stage::Witnesses,
        Stage::Quiz,
        Stage::Verdict,
    ];

    /// Stable wire name (kebab-case).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::CharacterSelect => "character-select",
            Self::CharacterIntro => "character-intro",
            Self::Prosecution => "prosecution",
            Self::Defense => "defense",
            Self::Witnesses => "witnesses",
            Self::Quiz => "quiz",
            Self::Verdict => "verdict",
        }
    }

    /// The "step N of 5" number shown on courtroom screens.
    ///
    /// The opening screens (Intro, CharacterSelect, CharacterIntro) are not
    /// numbered.
    pub fn courtroom_step(self) -> Option<u8> {
        match self {
            Self::Prosecution => Some(1),
            Self::Defense => Some(2),
            Self::Witnesses => Some(3),
            Self::Quiz => Some(4),
            Self::Verdict => Some(5),
            Self::Intro | Self::CharacterSelect | Self::CharacterIntro => None,
        }
    }

    /// Stage reached by a plain `advance` from this one.
    ///
    /// `None` where advancing needs more than a click: CharacterSelect needs a
    /// role, Quiz advances per question, Verdict only restarts.
    pub fn plain_successor(self) -> Option<Stage> {
        match self {
            Self::Intro => Some(Self::CharacterSelect),
            Self::CharacterIntro => Some(Self::Prosecution),
            Self::Prosecution => Some(Self::Defense),
            Self::Defense => Some(Self::Witnesses),
            Self::Witnesses => Some(Self::Quiz),
            Self::CharacterSelect | Self::Quiz | Self::Verdict => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| DomainError::parse(format!("Unknown stage: {}", s)))
    }
}
