mod progress;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use session::QuizSession;
pub use view::{AnswerOutcome, QuestionView};
pub use workflow::{QuizAdvance, QuizService};
