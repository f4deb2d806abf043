//! Progress bar value derivation

use serde::{Deserialize, Serialize};

use super::Stage;

/// Value of the courtroom progress bar, in percent.
///
/// Fixed per stage except during the quiz, where it grows proportionally
/// with the current question index from 60 toward (never reaching) 80:
///
/// | Stage | Value |
/// |-------|-------|
/// | Prosecution | 20 |
/// | Defense | 40 |
/// | Witnesses | 60 |
/// | Quiz | 60 + (index / count) * 20 |
/// | Verdict | 100 |
///
/// The opening screens show no progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressValue(f64);

impl ProgressValue {
    const QUIZ_BASE: f64 = 60.0;
    const QUIZ_SPAN: f64 = 20.0;

    /// Progress for `stage`, given the quiz position.
    ///
    /// # Examples
    ///
    /// ```
    /// use tribunal_domain::{ProgressValue, Stage};
    ///
    /// assert_eq!(ProgressValue::for_stage(Stage::Defense, 0, 4).unwrap().value(), 40.0);
    /// assert_eq!(ProgressValue::for_stage(Stage::Quiz, 2, 4).unwrap().value(), 70.0);
    /// assert!(ProgressValue::for_stage(Stage::Intro, 0, 4).is_none());
    /// ```
    pub fn for_stage(
        stage: Stage,
        current_question_index: usize,
        question_count: usize,
    ) -> Option<Self> {
        let value = match stage {
            Stage::Intro | Stage::CharacterSelect | Stage::CharacterIntro => return None,
            Stage::Prosecution => 20.0,
            Stage::Defense => 40.0,
            Stage::Witnesses => Self::QUIZ_BASE,
            Stage::Quiz => {
                if question_count == 0 {
                    Self::QUIZ_BASE
                } else {
                    Self::QUIZ_BASE
                        + (current_question_index as f64 / question_count as f64)
                            * Self::QUIZ_SPAN
                }
            }
            Stage::Verdict => 100.0,
        };
        Some(Self(value))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(stage: Stage, index: usize) -> Option<f64> {
        ProgressValue::for_stage(stage, index, 4).map(ProgressValue::value)
    }

    #[test]
    fn opening_screens_have_no_bar() {
        assert_eq!(progress(Stage::Intro, 0), None);
        assert_eq!(progress(Stage::CharacterSelect, 0), None);
        assert_eq!(progress(Stage::CharacterIntro, 0), None);
    }

    #[test]
    fn courtroom_stages_use_fixed_values() {
        assert_eq!(progress(Stage::Prosecution, 0), Some(20.0));
        assert_eq!(progress(Stage::Defense, 0), Some(40.0));
        assert_eq!(progress(Stage::Witnesses, 0), Some(60.0));
        assert_eq!(progress(Stage::Verdict, 3), Some(100.0));
    }

    #[test]
    fn quiz_grows_with_question_index_below_eighty() {
        assert_eq!(progress(Stage::Quiz, 0), Some(60.0));
        assert_eq!(progress(Stage::Quiz, 1), Some(65.0));
        assert_eq!(progress(Stage::Quiz, 3), Some(75.0));
    }
}
