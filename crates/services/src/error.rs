//! Shared error types for the services crate.

use thiserror::Error;

use qa_core::model::{OPTION_COUNT, QuizSummaryError};

/// Errors emitted by quiz sessions.
///
/// Apart from `Empty` (a normal "no quiz available" outcome for the caller to
/// present) these are programmer-contract violations: a correctly wired
/// presentation layer never triggers them. They are surfaced synchronously and
/// never retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for quiz")]
    Empty,

    #[error("quiz already completed")]
    Completed,

    #[error("current question already has a recorded answer")]
    AlreadyAnswered,

    #[error("no answer recorded for the current question")]
    NotAnswered,

    #[error("selected option {selected} is out of range (must be < {OPTION_COUNT})")]
    OptionOutOfRange { selected: usize },

    #[error("quiz is not complete")]
    NotComplete,

    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}
