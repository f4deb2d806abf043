//! Quiz progress - per-playthrough answer record and quiz navigation
//!
//! # Invariants
//!
//! - `answers.len()` equals the question count for the whole lifetime
//! - `current_question_index < answers.len()`
//! - once `explanation_visible` is set, the current answer is locked until
//!   the quiz moves to the next question

use crate::entities::Question;
use crate::events::{PlaythroughUpdate, Rejection};
use crate::value_objects::Score;

/// Result of asking the quiz to move past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved to the next question
    Next { from: usize, to: usize },
    /// The current question was the last one
    Finished,
    /// The current question has not been answered yet
    AwaitingAnswer,
}

/// Answer record and navigation position for one playthrough.
///
/// # Example
///
/// ```
/// use tribunal_domain::aggregates::{QuizProgress, QuizStep};
///
/// let mut quiz = QuizProgress::new(2);
/// assert_eq!(quiz.step_forward(), QuizStep::AwaitingAnswer);
/// assert_eq!(quiz.answers(), &[None, None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    current_question_index: usize,
    answers: Vec<Option<usize>>,
    selected_answer: Option<usize>,
    explanation_visible: bool,
}

impl QuizProgress {
    /// Fresh record with every slot unanswered.
    pub fn new(question_count: usize) -> Self {
        Self {
            current_question_index: 0,
            answers: vec![None; question_count],
            selected_answer: None,
            explanation_visible: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// One slot per question; `None` means unanswered.
    #[inline]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Option currently highlighted for the open question.
    #[inline]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    #[inline]
    pub fn explanation_visible(&self) -> bool {
        self.explanation_visible
    }

    /// Whether the "next" control is enabled.
    #[inline]
    pub fn can_step_forward(&self) -> bool {
        self.explanation_visible
    }

    #[inline]
    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    /// True when the open question is the last in the bank.
    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.answers.len()
    }

    // =========================================================================
    // Scoring
    // =========================================================================

    /// Count of recorded answers matching the bank's correct options.
    ///
    /// Computed from the answers every time; nothing is cached.
    pub fn score(&self, questions: &[Question]) -> Score {
        let correct = self
            .answers
            .iter()
            .zip(questions)
            .filter(|(answer, question)| **answer == Some(question.correct()))
            .count();
        Score::new(correct, questions.len())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Record `option` as the answer to question `question_index`.
    ///
    /// `question` must be the bank entry at `question_index`; it is used to
    /// validate the option and to report correctness.
    pub fn record_answer(
        &mut self,
        question_index: usize,
        question: &Question,
        option: usize,
    ) -> PlaythroughUpdate {
        if question_index != self.current_question_index {
            return PlaythroughUpdate::Rejected(Rejection::QuestionMismatch {
                current: self.current_question_index,
                requested: question_index,
            });
        }
        if !question.has_option(option) {
            return PlaythroughUpdate::Rejected(Rejection::OptionOutOfRange {
                option,
                option_count: question.option_count(),
            });
        }
        let Some(slot) = self.answers.get_mut(question_index) else {
            return PlaythroughUpdate::Rejected(Rejection::QuestionMismatch {
                current: self.current_question_index,
                requested: question_index,
            });
        };
        if self.explanation_visible {
            return match *slot {
                Some(recorded) if recorded == option => PlaythroughUpdate::AnswerAlreadyRecorded {
                    question_index,
                    option,
                },
                Some(recorded) => PlaythroughUpdate::Rejected(Rejection::AnswerLocked {
                    recorded,
                    requested: option,
                }),
                // Explanation only shows after recording, so the slot is filled
                None => PlaythroughUpdate::Rejected(Rejection::AwaitingAnswer),
            };
        }

        *slot = Some(option);
        self.selected_answer = Some(option);
        self.explanation_visible = true;

        PlaythroughUpdate::AnswerRecorded {
            question_index,
            option,
            correct: question.is_correct(option),
        }
    }

    /// Move past the open question.
    ///
    /// On the last question the record is left as is and `Finished` is
    /// returned; the caller owns the stage change.
    pub fn step_forward(&mut self) -> QuizStep {
        if !self.explanation_visible {
            return QuizStep::AwaitingAnswer;
        }
        if self.is_last_question() {
            return QuizStep::Finished;
        }

        let from = self.current_question_index;
        let to = from + 1;
        self.current_question_index = to;
        self.explanation_visible = false;
        // Restores a revisited answer; always None with forward-only navigation
        self.selected_answer = self.answers.get(to).copied().flatten();

        QuizStep::Next { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Question> {
        crate::content::test_pack().questions().to_vec()
    }

    mod recording {
        use super::*;

        #[test]
        fn records_answer_and_reveals_explanation() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());

            let update = quiz.record_answer(0, &questions[0], 1);

            assert_eq!(
                update,
                PlaythroughUpdate::AnswerRecorded {
                    question_index: 0,
                    option: 1,
                    correct: true,
                }
            );
            assert_eq!(quiz.answers()[0], Some(1));
            assert_eq!(quiz.selected_answer(), Some(1));
            assert!(quiz.explanation_visible());
        }

        #[test]
        fn empty_record_rejects_instead_of_panicking() {
            let questions = bank();
            let mut quiz = QuizProgress::new(0);

            let update = quiz.record_answer(0, &questions[0], 1);

            assert_eq!(
                update,
                PlaythroughUpdate::Rejected(Rejection::QuestionMismatch {
                    current: 0,
                    requested: 0,
                })
            );
            assert!(quiz.answers().is_empty());
            assert!(!quiz.explanation_visible());
        }

        #[test]
        fn reports_wrong_answers_as_incorrect() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            let update = quiz.record_answer(0, &questions[0], 3);
            assert!(matches!(
                update,
                PlaythroughUpdate::AnswerRecorded { correct: false, .. }
            ));
        }

        #[test]
        fn cannot_change_a_submitted_answer() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            quiz.record_answer(0, &questions[0], 1);
            let before = quiz.clone();

            let update = quiz.record_answer(0, &questions[0], 2);

            assert_eq!(
                update,
                PlaythroughUpdate::Rejected(Rejection::AnswerLocked {
                    recorded: 1,
                    requested: 2,
                })
            );
            assert_eq!(quiz, before);
            assert_eq!(quiz.answers()[0], Some(1));
        }

        #[test]
        fn resubmitting_the_same_answer_is_idempotent() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            quiz.record_answer(0, &questions[0], 1);
            let before = quiz.clone();

            let update = quiz.record_answer(0, &questions[0], 1);

            assert!(!update.changed_state());
            assert_eq!(quiz, before);
        }

        #[test]
        fn rejects_out_of_range_option_without_mutation() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            let before = quiz.clone();

            let update = quiz.record_answer(0, &questions[0], 4);

            assert_eq!(
                update,
                PlaythroughUpdate::Rejected(Rejection::OptionOutOfRange {
                    option: 4,
                    option_count: 4,
                })
            );
            assert_eq!(quiz, before);
        }

        #[test]
        fn rejects_answers_for_other_questions() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            let before = quiz.clone();

            let update = quiz.record_answer(2, &questions[2], 0);

            assert!(matches!(
                update,
                PlaythroughUpdate::Rejected(Rejection::QuestionMismatch {
                    current: 0,
                    requested: 2,
                })
            ));
            assert_eq!(quiz, before);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn blocked_until_answered() {
            let mut quiz = QuizProgress::new(4);
            let before = quiz.clone();
            assert_eq!(quiz.step_forward(), QuizStep::AwaitingAnswer);
            assert_eq!(quiz, before);
        }

        #[test]
        fn moves_to_next_question_and_hides_explanation() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            quiz.record_answer(0, &questions[0], 1);

            assert_eq!(quiz.step_forward(), QuizStep::Next { from: 0, to: 1 });
            assert_eq!(quiz.current_question_index(), 1);
            assert!(!quiz.explanation_visible());
            assert_eq!(quiz.selected_answer(), None);
        }

        #[test]
        fn finishes_on_last_question() {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            for (index, question) in questions.iter().enumerate() {
                quiz.record_answer(index, question, question.correct());
                let step = quiz.step_forward();
                if index + 1 < questions.len() {
                    assert!(matches!(step, QuizStep::Next { .. }));
                } else {
                    assert_eq!(step, QuizStep::Finished);
                }
            }
            assert_eq!(quiz.current_question_index(), 3);
            assert!(quiz.answers().iter().all(Option::is_some));
        }
    }

    mod scoring {
        use super::*;

        fn quiz_with(answers: &[usize]) -> QuizProgress {
            let questions = bank();
            let mut quiz = QuizProgress::new(questions.len());
            for (index, option) in answers.iter().enumerate() {
                quiz.record_answer(index, &questions[index], *option);
                quiz.step_forward();
            }
            quiz
        }

        #[test]
        fn all_correct_scores_four() {
            let score = quiz_with(&[1, 2, 3, 2]).score(&bank());
            assert_eq!(score.correct(), 4);
            assert_eq!(score.rounded_percent(), 100);
        }

        #[test]
        fn all_first_options_score_zero() {
            let score = quiz_with(&[0, 0, 0, 0]).score(&bank());
            assert_eq!(score.correct(), 0);
            assert_eq!(score.percentage(), 0.0);
        }

        #[test]
        fn unanswered_questions_do_not_count() {
            let score = quiz_with(&[1, 2]).score(&bank());
            assert_eq!(score, Score::new(2, 4));
        }
    }
}
