use std::fmt;

use chrono::{DateTime, Utc};

use qa_core::model::{OPTION_COUNT, Question, QuizSummary, QuizSummaryError};

use super::progress::QuizProgress;
use super::view::{AnswerOutcome, QuestionView};
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz attempt over an ordered question list.
///
/// The session owns a snapshot of the questions taken at creation time and
/// walks them strictly in order. Each question takes exactly one answer;
/// submitting records the answer and makes its correctness observable, a
/// separate `advance` moves to the next question. Once the index reaches the
/// question count the session is complete and only `summary` remains valid.
pub struct QuizSession {
    quiz_name: String,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    answers: Vec<usize>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Creates a session over a snapshot of questions.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided. Callers
    /// present that as "no quiz available", not as a failure.
    pub fn new(
        quiz_name: impl Into<String>,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            quiz_name: quiz_name.into(),
            questions,
            current: 0,
            score: 0,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn quiz_name(&self) -> &str {
        &self.quiz_name
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Recorded answers, one entry per answered question, in answer order.
    #[must_use]
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// True once the index has walked past the last question.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// True iff an answer has been recorded for the given question index.
    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        index < self.answers.len()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answers.len(),
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// The question at the current index, without its answer key.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is complete.
    pub fn current_question(&self) -> Result<QuestionView<'_>, SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };

        Ok(QuestionView {
            index: self.current,
            total: self.questions.len(),
            prompt: question.prompt(),
            options: question.options(),
        })
    }

    /// Records an answer for the current question and scores it.
    ///
    /// Does **not** advance the index; the correctness outcome stays
    /// observable for highlighting until `advance` is called.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is complete,
    /// `SessionError::AlreadyAnswered` if the current question already has a
    /// recorded answer, and `SessionError::OptionOutOfRange` for a selection
    /// outside the four options. Session state is unchanged on every error.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        if self.is_answered(self.current) {
            return Err(SessionError::AlreadyAnswered);
        }
        if selected >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange { selected });
        }

        let is_correct = question.is_correct(selected);
        self.answers.push(selected);
        if is_correct {
            self.score += 1;
        }

        Ok(AnswerOutcome {
            index: self.current,
            selected,
            correct_index: question.correct_index(),
            is_correct,
        })
    }

    /// Moves to the next question; completes the session past the last one.
    ///
    /// `now` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already complete
    /// and `SessionError::NotAnswered` if the current question has no
    /// recorded answer yet.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if !self.is_answered(self.current) {
            return Err(SessionError::NotAnswered);
        }

        self.current += 1;
        if self.current >= self.questions.len() {
            self.completed_at = Some(now);
        }
        Ok(())
    }

    /// Final score, question count, and tier.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn summary(&self) -> Result<QuizSummary, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }

        let total = u32::try_from(self.questions.len()).map_err(|_| {
            SessionError::Summary(QuizSummaryError::TooManyQuestions {
                len: self.questions.len(),
            })
        })?;
        Ok(QuizSummary::new(self.score, total)?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("quiz_name", &self.quiz_name)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
