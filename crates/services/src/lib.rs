#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use qa_core::Clock;

pub use error::SessionError;
pub use quiz::{
    AnswerOutcome, QuestionView, QuizAdvance, QuizProgress, QuizService, QuizSession,
};
