//! Playthrough mutation outcomes.
//!
//! Every intent applied to a `Playthrough` returns one of these. A rejected
//! intent leaves the playthrough untouched; the rejection only tells the
//! caller (and its logs) why nothing happened.

use std::fmt;

use crate::value_objects::{Role, Score, Stage};

/// Outcome of applying an intent to a playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaythroughUpdate {
    /// Plain stage change (advance through the narrative, or go back)
    StageChanged { from: Stage, to: Stage },
    /// Role chosen on the character-select screen; moves to CharacterIntro
    RoleSelected { role: Role },
    /// Witnesses -> Quiz with a fresh quiz record
    QuizStarted { question_count: usize },
    /// An answer was recorded and the explanation revealed
    AnswerRecorded {
        question_index: usize,
        option: usize,
        correct: bool,
    },
    /// The same answer was submitted again for an answered question
    AnswerAlreadyRecorded { question_index: usize, option: usize },
    /// Moved on to the next question
    QuestionAdvanced { from: usize, to: usize },
    /// Last question left; now on the Verdict stage
    QuizCompleted { score: Score },
    /// Full reset back to Intro
    Restarted { from: Stage },
    /// The intent's precondition was not met; nothing changed
    Rejected(Rejection),
}

impl PlaythroughUpdate {
    /// True if the intent was refused.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// True if the playthrough state was modified.
    pub fn changed_state(&self) -> bool {
        !matches!(
            self,
            Self::Rejected(_) | Self::AnswerAlreadyRecorded { .. }
        )
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Why an intent was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Advance on the character-select screen; a role must be picked instead
    RoleRequired,
    /// Advance during the quiz before the current question was answered
    AwaitingAnswer,
    /// Advance on the Verdict screen; only restart leaves it
    VerdictReached,
    /// Role selection outside the character-select screen
    RoleSelectionClosed { stage: Stage },
    /// Answer submitted outside the quiz
    NotInQuiz { stage: Stage },
    /// Answer submitted for a question other than the current one
    QuestionMismatch { current: usize, requested: usize },
    /// Option index outside the current question's options
    OptionOutOfRange { option: usize, option_count: usize },
    /// A different answer was already recorded for this question
    AnswerLocked { recorded: usize, requested: usize },
    /// Go back from a screen that has no way back
    NoWayBack { stage: Stage },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoleRequired => write!(f, "select a role to continue"),
            Self::AwaitingAnswer => write!(f, "answer the current question first"),
            Self::VerdictReached => write!(f, "the verdict is final; restart to play again"),
            Self::RoleSelectionClosed { stage } => {
                write!(f, "roles can only be chosen on character-select (now on {stage})")
            }
            Self::NotInQuiz { stage } => write!(f, "no question is open on {stage}"),
            Self::QuestionMismatch { current, requested } => write!(
                f,
                "question {requested} is not the current question ({current})"
            ),
            Self::OptionOutOfRange { option_count, .. } => write!(
                f,
                "no such option; the question has {option_count} options"
            ),
            Self::AnswerLocked { .. } => write!(
                f,
                "this question is already answered; the answer cannot be changed"
            ),
            Self::NoWayBack { stage } => write!(f, "there is no way back from {stage}"),
        }
    }
}
