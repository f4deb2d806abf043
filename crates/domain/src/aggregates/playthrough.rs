//! Playthrough aggregate - the presentation state machine
//!
//! # Transition Graph
//!
//! | From | Intent | To | Side effect |
//! |------|--------|----|-------------|
//! | Intro | advance | CharacterSelect | - |
//! | CharacterSelect | select role R | CharacterIntro | role := R |
//! | CharacterSelect | go back | Intro | - |
//! | CharacterIntro | advance | Prosecution | - |
//! | Prosecution | advance | Defense | - |
//! | Defense | advance | Witnesses | - |
//! | Witnesses | advance | Quiz | fresh `QuizProgress` |
//! | Quiz | advance (answered) | Quiz / Verdict | next question, or verdict after the last |
//! | any | restart | Intro | full reset |
//!
//! Any other intent is rejected: the playthrough is left untouched and the
//! returned `PlaythroughUpdate::Rejected` says why.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state only changes through the intents above
//! - **Content injected**: the tables arrive as `Arc<ContentPack>` and are
//!   never mutated here

use std::sync::Arc;

use crate::content::ContentPack;
use crate::entities::{Question, RoleBadge};
use crate::events::{PlaythroughUpdate, Rejection};
use crate::value_objects::{OptionMark, ProgressValue, Role, Score, Stage};

use super::quiz_progress::{QuizProgress, QuizStep};

/// A user intent, as produced by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaythroughAction {
    Advance,
    SelectRole(Role),
    /// Answer the open question with this option index
    SelectAnswer(usize),
    /// Answer an explicit question; must be the open one
    RecordAnswer { question_index: usize, option: usize },
    GoBack,
    Restart,
}

/// One traversal of the walkthrough.
///
/// # Invariants
///
/// - `role` is set at most once between restarts, only on
///   CharacterSelect -> CharacterIntro
/// - `quiz.answers().len()` always equals the question count
///
/// # Example
///
/// ```ignore
/// let mut playthrough = Playthrough::new(Arc::new(pack));
/// playthrough.advance();
/// playthrough.select_role(Role::Defense);
/// assert_eq!(playthrough.stage(), Stage::CharacterIntro);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playthrough {
    content: Arc<ContentPack>,
    stage: Stage,
    role: Option<Role>,
    quiz: QuizProgress,
}

impl Playthrough {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Start on Intro with no role and an all-unanswered quiz record.
    pub fn new(content: Arc<ContentPack>) -> Self {
        let quiz = QuizProgress::new(content.question_count());
        Self {
            content,
            stage: Stage::Intro,
            role: None,
            quiz,
        }
    }

    // =========================================================================
    // State Accessors
    // =========================================================================

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The chosen role, or `None` before character select.
    #[inline]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[inline]
    pub fn quiz(&self) -> &QuizProgress {
        &self.quiz
    }

    #[inline]
    pub fn content(&self) -> &ContentPack {
        &self.content
    }

    // =========================================================================
    // Derived Queries
    // =========================================================================

    /// The open question; `None` outside the Quiz stage.
    pub fn current_question(&self) -> Option<&Question> {
        if self.stage != Stage::Quiz {
            return None;
        }
        self.content.question(self.quiz.current_question_index())
    }

    /// Feedback marks for the open question's options; empty outside the quiz.
    pub fn option_marks(&self) -> Vec<OptionMark> {
        self.current_question()
            .map(|question| {
                OptionMark::for_question(
                    question,
                    self.quiz.selected_answer(),
                    self.quiz.explanation_visible(),
                )
            })
            .unwrap_or_default()
    }

    /// Whether the highlighted answer is correct; `None` until one is chosen.
    pub fn selected_is_correct(&self) -> Option<bool> {
        let question = self.current_question()?;
        self.quiz
            .selected_answer()
            .map(|option| question.is_correct(option))
    }

    /// Whether the advance control is available on the current stage.
    pub fn can_advance(&self) -> bool {
        match self.stage {
            Stage::Intro
            | Stage::CharacterIntro
            | Stage::Prosecution
            | Stage::Defense
            | Stage::Witnesses => true,
            Stage::Quiz => self.quiz.can_step_forward(),
            Stage::CharacterSelect | Stage::Verdict => false,
        }
    }

    /// Whether a go-back control is shown on the current stage.
    #[inline]
    pub fn can_go_back(&self) -> bool {
        self.stage == Stage::CharacterSelect
    }

    /// Current score; recomputed from the answers on every call.
    pub fn score(&self) -> Score {
        self.quiz.score(self.content.questions())
    }

    pub fn progress(&self) -> Option<ProgressValue> {
        ProgressValue::for_stage(
            self.stage,
            self.quiz.current_question_index(),
            self.content.question_count(),
        )
    }

    /// Badge for the chosen role; shows the Judge while no role is chosen
    /// without selecting it.
    pub fn badge(&self) -> RoleBadge {
        self.content.badge(self.role)
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Apply any intent.
    pub fn apply(&mut self, action: PlaythroughAction) -> PlaythroughUpdate {
        match action {
            PlaythroughAction::Advance => self.advance(),
            PlaythroughAction::SelectRole(role) => self.select_role(role),
            PlaythroughAction::SelectAnswer(option) => self.select_answer(option),
            PlaythroughAction::RecordAnswer {
                question_index,
                option,
            } => self.record_answer(question_index, option),
            PlaythroughAction::GoBack => self.go_back(),
            PlaythroughAction::Restart => self.restart(),
        }
    }

    /// Pure form of [`apply`](Self::apply): returns the next state and the
    /// outcome, leaving `self` as it was.
    pub fn transitioned(&self, action: PlaythroughAction) -> (Self, PlaythroughUpdate) {
        let mut next = self.clone();
        let update = next.apply(action);
        (next, update)
    }

    /// Advance to the next stage (or the next quiz question).
    pub fn advance(&mut self) -> PlaythroughUpdate {
        match self.stage {
            Stage::CharacterSelect => PlaythroughUpdate::Rejected(Rejection::RoleRequired),
            Stage::Verdict => PlaythroughUpdate::Rejected(Rejection::VerdictReached),
            Stage::Quiz => match self.quiz.step_forward() {
                QuizStep::Next { from, to } => PlaythroughUpdate::QuestionAdvanced { from, to },
                QuizStep::Finished => {
                    self.stage = Stage::Verdict;
                    PlaythroughUpdate::QuizCompleted {
                        score: self.score(),
                    }
                }
                QuizStep::AwaitingAnswer => {
                    PlaythroughUpdate::Rejected(Rejection::AwaitingAnswer)
                }
            },
            Stage::Witnesses => {
                self.quiz = QuizProgress::new(self.content.question_count());
                self.stage = Stage::Quiz;
                PlaythroughUpdate::QuizStarted {
                    question_count: self.quiz.question_count(),
                }
            }
            from @ (Stage::Intro | Stage::CharacterIntro | Stage::Prosecution | Stage::Defense) => {
                match from.plain_successor() {
                    Some(to) => {
                        self.stage = to;
                        PlaythroughUpdate::StageChanged { from, to }
                    }
                    None => PlaythroughUpdate::Rejected(Rejection::RoleRequired),
                }
            }
        }
    }

    /// Choose the player's role; only on the character-select screen.
    pub fn select_role(&mut self, role: Role) -> PlaythroughUpdate {
        if self.stage != Stage::CharacterSelect {
            return PlaythroughUpdate::Rejected(Rejection::RoleSelectionClosed {
                stage: self.stage,
            });
        }
        self.role = Some(role);
        self.stage = Stage::CharacterIntro;
        PlaythroughUpdate::RoleSelected { role }
    }

    /// Answer the open question.
    pub fn select_answer(&mut self, option: usize) -> PlaythroughUpdate {
        self.record_answer(self.quiz.current_question_index(), option)
    }

    /// Answer question `question_index`, which must be the open one.
    pub fn record_answer(&mut self, question_index: usize, option: usize) -> PlaythroughUpdate {
        if self.stage != Stage::Quiz {
            return PlaythroughUpdate::Rejected(Rejection::NotInQuiz { stage: self.stage });
        }
        let Some(question) = self.content.question(question_index) else {
            return PlaythroughUpdate::Rejected(Rejection::QuestionMismatch {
                current: self.quiz.current_question_index(),
                requested: question_index,
            });
        };
        self.quiz.record_answer(question_index, question, option)
    }

    /// Leave character select for the title screen.
    pub fn go_back(&mut self) -> PlaythroughUpdate {
        if self.stage != Stage::CharacterSelect {
            return PlaythroughUpdate::Rejected(Rejection::NoWayBack { stage: self.stage });
        }
        self.stage = Stage::Intro;
        PlaythroughUpdate::StageChanged {
            from: Stage::CharacterSelect,
            to: Stage::Intro,
        }
    }

    /// Full reset to the initial state. Legal from any stage.
    pub fn restart(&mut self) -> PlaythroughUpdate {
        let from = self.stage;
        *self = Self::new(Arc::clone(&self.content));
        PlaythroughUpdate::Restarted { from }
    }
}

// ============================================================================
// Tests
// ============================================================================
