//! Quiz question entity

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// A multiple-choice question from the bank.
///
/// # Invariants
///
/// - `prompt` is non-empty
/// - at least two options
/// - `correct` is a valid index into `options`
///
/// Deserialization goes through the same validation as [`Question::new`].
///
/// # Example
///
/// ```
/// use tribunal_domain::Question;
///
/// let question = Question::new(
///     1,
///     "Which friction is smallest?",
///     vec!["Static".into(), "Sliding".into(), "Rolling".into()],
///     2,
///     "Rolling friction is much smaller than sliding friction.",
/// )
/// .unwrap();
///
/// assert!(question.is_correct(2));
/// assert!(question.has_option(1));
/// assert!(!question.has_option(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionWireFormat", into = "QuestionWireFormat")]
pub struct Question {
    id: u32,
    prompt: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
}

impl Question {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Question {} has an empty prompt",
                id
            )));
        }
        if options.len() < MIN_OPTIONS {
            return Err(DomainError::validation(format!(
                "Question {} needs at least {} options, got {}",
                id,
                MIN_OPTIONS,
                options.len()
            )));
        }
        if correct >= options.len() {
            return Err(DomainError::validation(format!(
                "Question {} marks option {} correct but has only {} options",
                id,
                correct,
                options.len()
            )));
        }
        Ok(Self {
            id,
            prompt,
            options,
            correct,
            explanation: explanation.into(),
        })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[inline]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[inline]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Index of the correct option.
    #[inline]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[inline]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Returns true if `option` indexes one of this question's options.
    #[inline]
    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }

    #[inline]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

// ============================================================================
// Serde wire format
// ============================================================================

#[derive(Serialize, Deserialize)]
struct QuestionWireFormat {
    id: u32,
    prompt: String,
    options: Vec<String>,
    correct: usize,
    #[serde(default)]
    explanation: String,
}

impl TryFrom<QuestionWireFormat> for Question {
    type Error = DomainError;

    fn try_from(wire: QuestionWireFormat) -> Result<Self, Self::Error> {
        Question::new(
            wire.id,
            wire.prompt,
            wire.options,
            wire.correct,
            wire.explanation,
        )
    }
}

impl From<Question> for QuestionWireFormat {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            prompt: question.prompt,
            options: question.options,
            correct: question.correct,
            explanation: question.explanation,
        }
    }
}
