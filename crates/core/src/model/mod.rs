mod category;
mod question;
mod quiz;
mod summary;
mod topic;

pub use category::{Category, CategoryError};
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use quiz::{Quiz, QuizError};
pub use summary::{QuizSummary, QuizSummaryError, Tier};
pub use topic::{Topic, TopicError};
