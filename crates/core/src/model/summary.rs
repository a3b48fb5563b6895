use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("summary requires at least one question")]
    NoQuestions,

    #[error("score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many questions for a single quiz: {len}")]
    TooManyQuestions { len: usize },
}

//
// ─── TIER ──────────────────────────────────────────────────────────────────────
//

/// Qualitative score band for a completed quiz.
///
/// Both thresholds are inclusive on the lower bound: 80% is `Strong`,
/// 60% is `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Strong,
    Moderate,
    NeedsReview,
}

impl Tier {
    /// Derives the tier from an integer percentage in `[0, 100]`.
    #[must_use]
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Self::Strong
        } else if percentage >= 60 {
            Self::Moderate
        } else {
            Self::NeedsReview
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::NeedsReview => "needs review",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Final result for a completed quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    score: u32,
    total: u32,
    percentage: u32,
    tier: Tier,
}

impl QuizSummary {
    /// Builds a summary from a score and the question count.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::NoQuestions` if `total` is zero and
    /// `QuizSummaryError::ScoreExceedsTotal` if the score does not fit the count.
    pub fn new(score: u32, total: u32) -> Result<Self, QuizSummaryError> {
        if total == 0 {
            return Err(QuizSummaryError::NoQuestions);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }

        // score <= total, so the result is at most 100 and always fits.
        let percentage = u32::try_from(u64::from(score) * 100 / u64::from(total))
            .expect("percentage is at most 100");
        Ok(Self {
            score,
            total,
            percentage,
            tier: Tier::for_percentage(percentage),
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Integer percentage of correct answers, truncated toward zero.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_score_is_strong() {
        let summary = QuizSummary::new(4, 4).unwrap();
        assert_eq!(summary.percentage(), 100);
        assert_eq!(summary.tier(), Tier::Strong);
    }

    #[test]
    fn strong_boundary_is_inclusive_at_80() {
        let summary = QuizSummary::new(4, 5).unwrap();
        assert_eq!(summary.percentage(), 80);
        assert_eq!(summary.tier(), Tier::Strong);
    }

    #[test]
    fn moderate_boundary_is_inclusive_at_60() {
        let summary = QuizSummary::new(3, 5).unwrap();
        assert_eq!(summary.percentage(), 60);
        assert_eq!(summary.tier(), Tier::Moderate);
    }

    #[test]
    fn below_60_needs_review() {
        let summary = QuizSummary::new(1, 2).unwrap();
        assert_eq!(summary.percentage(), 50);
        assert_eq!(summary.tier(), Tier::NeedsReview);

        let zero = QuizSummary::new(0, 3).unwrap();
        assert_eq!(zero.tier(), Tier::NeedsReview);
    }

    #[test]
    fn just_below_strong_is_moderate() {
        let summary = QuizSummary::new(7, 9).unwrap();
        assert_eq!(summary.percentage(), 77);
        assert_eq!(summary.tier(), Tier::Moderate);
    }

    #[test]
    fn summary_rejects_invalid_counts() {
        assert!(matches!(
            QuizSummary::new(0, 0).unwrap_err(),
            QuizSummaryError::NoQuestions
        ));
        assert!(matches!(
            QuizSummary::new(5, 4).unwrap_err(),
            QuizSummaryError::ScoreExceedsTotal { score: 5, total: 4 }
        ));
    }

    #[test]
    fn tier_labels() {
        assert_eq!(Tier::Strong.to_string(), "strong");
        assert_eq!(Tier::Moderate.to_string(), "moderate");
        assert_eq!(Tier::NeedsReview.to_string(), "needs review");
    }
}
