use std::sync::Arc;

use knowledge::KnowledgeStore;
use qa_core::model::QuizSummary;

use super::session::QuizSession;
use super::view::AnswerOutcome;
use crate::Clock;
use crate::error::SessionError;

/// Result of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAdvance {
    /// More questions remain; carries the new current index.
    Next(usize),
    /// The session just completed.
    Completed(QuizSummary),
}

/// Orchestrates quiz start and stepping against the knowledge store.
///
/// Owns the clock and the store handle so sessions stay pure values driven by
/// explicit calls, independent of any UI framework.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    store: Arc<KnowledgeStore>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<KnowledgeStore>) -> Self {
        Self { clock, store }
    }

    #[must_use]
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Starts a quiz for the given name, snapshotting its questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when the store has no questions under
    /// that name; callers present "no quiz available" instead of starting.
    pub fn start_quiz(&self, name: &str) -> Result<QuizSession, SessionError> {
        let questions = self.store.questions(name).to_vec();
        QuizSession::new(name, questions, self.clock.now())
    }

    /// Records an answer for the session's current question.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` contract violations from the session.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        selected: usize,
    ) -> Result<AnswerOutcome, SessionError> {
        session.submit_answer(selected)
    }

    /// Advances past the answered question, producing the summary on completion.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` contract violations from the session.
    pub fn advance_current(&self, session: &mut QuizSession) -> Result<QuizAdvance, SessionError> {
        session.advance(self.clock.now())?;

        if session.is_complete() {
            Ok(QuizAdvance::Completed(session.summary()?))
        } else {
            Ok(QuizAdvance::Next(session.current_index()))
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use qa_core::model::{Category, Question, Quiz, Tier, Topic};
    use qa_core::time::fixed_clock;

    fn store() -> Arc<KnowledgeStore> {
        let questions = vec![
            Question::new("First?", ["a", "b", "c", "d"], 1).unwrap(),
            Question::new("Second?", ["a", "b", "c", "d"], 2).unwrap(),
        ];
        Arc::new(
            KnowledgeStore::builder()
                .category(Category::new("Test Levels", ["Test Levels"]).unwrap())
                .topic(Topic::new("Test Levels", "The four main levels of testing.").unwrap())
                .quiz(Quiz::new("Test Levels", questions).unwrap())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn start_quiz_for_unknown_name_is_empty() {
        let service = QuizService::new(fixed_clock(), store());

        let err = service.start_quiz("Tool Support for Testing").unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn session_snapshot_is_independent_of_the_store() {
        let service = QuizService::new(fixed_clock(), store());
        let session = service.start_quiz("Test Levels").unwrap();

        drop(service);
        assert_eq!(session.total_questions(), 2);
        assert_eq!(session.current_question().unwrap().prompt, "First?");
    }

    #[test]
    fn advance_reports_next_then_completed() {
        let service = QuizService::new(fixed_clock(), store());
        let mut session = service.start_quiz("Test Levels").unwrap();

        service.answer_current(&mut session, 1).unwrap();
        assert_eq!(
            service.advance_current(&mut session).unwrap(),
            QuizAdvance::Next(1)
        );

        service.answer_current(&mut session, 0).unwrap();
        let QuizAdvance::Completed(summary) = service.advance_current(&mut session).unwrap()
        else {
            panic!("expected completion");
        };

        assert_eq!((summary.score(), summary.total()), (1, 2));
        assert_eq!(summary.tier(), Tier::NeedsReview);
    }
}
