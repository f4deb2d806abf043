//! Per-option feedback mark for the open quiz question

use serde::{Deserialize, Serialize};

use crate::entities::Question;

/// How an answer option is marked on the quiz screen.
///
/// Before an answer is submitted every option is `Selectable`. Afterwards the
/// correct option is `Correct`, a wrongly chosen option is `Incorrect`, and
/// the rest are `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    Selectable,
    Correct,
    Incorrect,
    Neutral,
}

impl OptionMark {
    /// Marks for every option of `question`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tribunal_domain::{OptionMark, Question};
    ///
    /// let question = Question::new(1, "?", vec!["a".into(), "b".into(), "c".into()], 1, "").unwrap();
    ///
    /// assert_eq!(
    ///     OptionMark::for_question(&question, Some(2), true),
    ///     vec![OptionMark::Neutral, OptionMark::Correct, OptionMark::Incorrect]
    /// );
    /// assert!(OptionMark::for_question(&question, None, false)
    ///     .iter()
    ///     .all(|mark| *mark == OptionMark::Selectable));
    /// ```
    pub fn for_question(
        question: &Question,
        selected: Option<usize>,
        explanation_visible: bool,
    ) -> Vec<OptionMark> {
        (0..question.option_count())
            .map(|index| {
                if !explanation_visible {
                    OptionMark::Selectable
                } else if question.is_correct(index) {
                    OptionMark::Correct
                } else if selected == Some(index) {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Neutral
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            1,
            "Prompt",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            2,
            "",
        )
        .unwrap()
    }

    #[test]
    fn correct_selection_marks_only_the_correct_option() {
        let marks = OptionMark::for_question(&question(), Some(2), true);
        assert_eq!(
            marks,
            vec![
                OptionMark::Neutral,
                OptionMark::Neutral,
                OptionMark::Correct,
                OptionMark::Neutral,
            ]
        );
    }

    #[test]
    fn wrong_selection_is_marked_incorrect() {
        let marks = OptionMark::for_question(&question(), Some(0), true);
        assert_eq!(marks[0], OptionMark::Incorrect);
        assert_eq!(marks[2], OptionMark::Correct);
    }
}
