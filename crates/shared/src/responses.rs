//! Response types returned from the engine for every player action
//!
//! A presentation layer renders [`StageView`] and nothing else: it never needs
//! to inspect the state machine directly.

use serde::{Deserialize, Serialize};

use tribunal_domain::{Advocate, IntroCard, OptionMark, Role, RoleProfile, Ruling, Witness};

// =============================================================================
// Action Response
// =============================================================================

/// Result of dispatching one `PlayerAction`.
///
/// Rejected actions are not errors: the view is returned unchanged and
/// `rejection` explains why nothing happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
    pub view: StageView,
}

impl ActionResponse {
    /// Create a response for an action that was applied
    pub fn accepted(view: StageView) -> Self {
        Self {
            accepted: true,
            rejection: None,
            view,
        }
    }

    /// Create a response for an action that was a no-op
    pub fn rejected(reason: impl Into<String>, view: StageView) -> Self {
        Self {
            accepted: false,
            rejection: Some(reason.into()),
            view,
        }
    }
}

// =============================================================================
// Stage Views
// =============================================================================

/// Everything one screen shows, tagged by `stage` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum StageView {
    /// Opening card
    Intro { intro: IntroCard },
    /// Role cards; the player must pick one to continue
    CharacterSelect {
        roles: Vec<RoleProfile>,
        #[serde(rename = "canGoBack")]
        can_go_back: bool,
    },
    /// Briefing for the chosen (or display-default) role
    CharacterIntro { profile: RoleProfile },
    /// Prosecution arguments
    Prosecution {
        header: CourtHeader,
        advocate: Option<Advocate>,
    },
    /// Defense arguments
    Defense {
        header: CourtHeader,
        advocate: Option<Advocate>,
    },
    /// Witness testimonies
    Witnesses {
        header: CourtHeader,
        witnesses: Vec<Witness>,
    },
    /// The open quiz question
    Quiz {
        header: CourtHeader,
        question: QuizQuestionData,
    },
    /// Final score and ruling
    Verdict {
        header: CourtHeader,
        score: ScoreData,
        ruling: Ruling,
    },
}

impl StageView {
    /// Wire name of the stage, as it appears in the `stage` tag.
    pub fn stage_name(&self) -> &'static str {
        match self {
            Self::Intro { .. } => "intro",
            Self::CharacterSelect { .. } => "character-select",
            Self::CharacterIntro { .. } => "character-intro",
            Self::Prosecution { .. } => "prosecution",
            Self::Defense { .. } => "defense",
            Self::Witnesses { .. } => "witnesses",
            Self::Quiz { .. } => "quiz",
            Self::Verdict { .. } => "verdict",
        }
    }

    /// Courtroom header, present on the five numbered screens.
    pub fn header(&self) -> Option<&CourtHeader> {
        match self {
            Self::Prosecution { header, .. }
            | Self::Defense { header, .. }
            | Self::Witnesses { header, .. }
            | Self::Quiz { header, .. }
            | Self::Verdict { header, .. } => Some(header),
            Self::Intro { .. } | Self::CharacterSelect { .. } | Self::CharacterIntro { .. } => {
                None
            }
        }
    }
}

/// Step indicator, progress bar and role badge shared by courtroom screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtHeader {
    /// 1-based step ("Step 2 of 5")
    pub step: u8,
    pub total_steps: u8,
    /// Progress bar fill, 0..=100
    pub progress: f64,
    pub badge: BadgeData,
}

/// "You are: ..." badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeData {
    pub role: Role,
    pub label: String,
    pub icon: String,
}

// =============================================================================
// Quiz
// =============================================================================

/// The open quiz question with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionData {
    /// 1-based question number
    pub number: usize,
    pub total: usize,
    pub question_id: u32,
    pub prompt: String,
    pub options: Vec<OptionData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_answer: Option<usize>,
    pub explanation_visible: bool,
    /// Only sent once the answer is submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    pub can_advance: bool,
    /// The "next" control delivers the verdict instead of the next question
    pub is_last: bool,
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionData {
    /// 0-based index, as accepted by `select_answer`
    pub index: usize,
    pub text: String,
    pub mark: OptionMark,
}

// =============================================================================
// Verdict
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreData {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub rounded_percent: u32,
}
