//! Quiz score value object

use serde::{Deserialize, Serialize};

/// Number of correctly answered questions out of the bank size.
///
/// Always computed from the recorded answers on demand (see
/// `QuizProgress::score`), never stored on the playthrough.
///
/// # Rounding
///
/// `rounded_percent` rounds half away from zero (`f64::round`). With the
/// four-question bank no tie can occur, so the policy only matters for
/// custom content packs.
///
/// # Examples
///
/// ```
/// use tribunal_domain::Score;
///
/// let score = Score::new(3, 4);
/// assert_eq!(score.percentage(), 75.0);
/// assert_eq!(Score::new(1, 3).rounded_percent(), 33);
/// assert_eq!(Score::new(2, 3).rounded_percent(), 67);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    #[inline]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `100 * correct / total` as a real number; 0 for an empty bank.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.correct as f64 / self.total as f64
    }

    /// Percentage rounded half away from zero, for display.
    pub fn rounded_percent(&self) -> u32 {
        self.percentage().round() as u32
    }
}
