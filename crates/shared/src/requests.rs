//! Request types sent from a presentation layer to the engine
//!
//! One `PlayerAction` is one user intent. The engine answers every action
//! with an [`ActionResponse`](crate::responses::ActionResponse), accepted or not.

use serde::{Deserialize, Serialize};

use tribunal_domain::Role;

/// A user intent, tagged by `type` on the wire.
///
/// ```json
/// { "type": "select_answer", "option": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Move to the next stage (or next question during the quiz)
    Advance,
    /// Pick a persona on the character-select screen
    SelectRole { role: Role },
    /// Submit an answer for the open quiz question (0-based option index)
    SelectAnswer { option: usize },
    /// Leave character-select for the intro screen
    GoBack,
    /// Start over from the intro screen
    Restart,
    /// Unknown action type for forward compatibility
    ///
    /// Newer clients may send actions this engine does not know; they are
    /// answered with a rejected response instead of a decode failure.
    #[serde(other)]
    Unknown,
}

impl PlayerAction {
    /// Wire name of the action, as it appears in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::SelectRole { .. } => "select_role",
            Self::SelectAnswer { .. } => "select_answer",
            Self::GoBack => "go_back",
            Self::Restart => "restart",
            Self::Unknown => "unknown",
        }
    }
}
