use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz name cannot be empty")]
    EmptyName,

    #[error("quiz must contain at least one question")]
    NoQuestions,
}

/// A named, ordered, non-empty question list.
///
/// Quizzes are keyed by name in the store, decoupled from the category list
/// the same way topic content is; a category without an authored quiz simply
/// has no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    name: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Creates a validated quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyName` for a blank name and
    /// `QuizError::NoQuestions` for an empty question list.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuizError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuizError::EmptyName);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        Ok(Self { name, questions })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Questions in authored (fixed) order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
