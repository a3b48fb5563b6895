//! Presentation-facing views over session state.
//!
//! These are intentionally **not** UI view-models: no pre-formatted strings,
//! no localization assumptions. The UI formats prompts and option labels as
//! needed.

/// The current question as shown to the user.
///
/// Carries the prompt and the options in stored (never shuffled) order, but
/// structurally cannot leak the correct index before an answer is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// Zero-based position within the session.
    pub index: usize,
    /// Total question count for the session.
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [String],
}

impl QuestionView<'_> {
    /// One-based question number for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Outcome of submitting an answer for one question.
///
/// Observable before advancing, so the UI can highlight the correct and the
/// selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Zero-based index of the answered question.
    pub index: usize,
    /// Option index the user selected.
    pub selected: usize,
    /// Option index of the correct answer.
    pub correct_index: usize,
    pub is_correct: bool,
}
