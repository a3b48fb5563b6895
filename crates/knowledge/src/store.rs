use std::collections::{HashMap, HashSet};

use thiserror::Error;

use qa_core::model::{
    Category, CategoryError, Question, QuestionError, Quiz, QuizError, Topic, TopicError,
};

/// Fixed text returned when a topic has no content entry.
pub const MISSING_CONTENT: &str = "Content for this topic is not available.";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Load-time corpus validation errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CorpusError {
    #[error("duplicate category {name:?}")]
    DuplicateCategory { name: String },

    #[error("duplicate topic {name:?}")]
    DuplicateTopic { name: String },

    #[error("duplicate quiz {name:?}")]
    DuplicateQuiz { name: String },

    #[error("category {category:?} lists topic {topic:?} with no content entry")]
    MissingContent { category: String, topic: String },

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Topic(#[from] TopicError),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

//
// ─── STORE ─────────────────────────────────────────────────────────────────────
//

/// Immutable lookup structure over the category/topic/question corpus.
///
/// Built once at process start and read-only for the process lifetime, so it
/// is safe to share across any number of readers without synchronization.
/// Lookup misses are normal "nothing to show" outcomes, never errors.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    categories: Vec<Category>,
    content: HashMap<String, String>,
    quizzes: Vec<Quiz>,
}

impl KnowledgeStore {
    #[must_use]
    pub fn builder() -> KnowledgeStoreBuilder {
        KnowledgeStoreBuilder::default()
    }

    /// Categories in canonical display order, stable across calls.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Topic names for a category, in display order.
    ///
    /// Returns an empty slice for an unknown category.
    #[must_use]
    pub fn topics(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.name() == category)
            .map_or(&[], Category::topics)
    }

    /// Content text for a topic, looked up by topic name alone.
    ///
    /// Returns the fixed [`MISSING_CONTENT`] placeholder for an unknown topic.
    #[must_use]
    pub fn content(&self, topic: &str) -> &str {
        self.content
            .get(topic)
            .map_or(MISSING_CONTENT, String::as_str)
    }

    /// Questions for a quiz, in authored order.
    ///
    /// Returns an empty slice for an unknown name or a category with no
    /// authored quiz.
    #[must_use]
    pub fn questions(&self, name: &str) -> &[Question] {
        self.quizzes
            .iter()
            .find(|q| q.name() == name)
            .map_or(&[], Quiz::questions)
    }

    /// Quizzes in authored order.
    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }
}

//
// ─── BUILDER ───────────────────────────────────────────────────────────────────
//

/// Accumulates corpus entries and validates them as a whole on `build`.
#[derive(Debug, Default)]
pub struct KnowledgeStoreBuilder {
    categories: Vec<Category>,
    topics: Vec<Topic>,
    quizzes: Vec<Quiz>,
}

impl KnowledgeStoreBuilder {
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    #[must_use]
    pub fn topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    #[must_use]
    pub fn quiz(mut self, quiz: Quiz) -> Self {
        self.quizzes.push(quiz);
        self
    }

    /// Validates the corpus and builds the immutable store.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` for duplicate category/topic/quiz names and for
    /// category topic names that have no content entry.
    pub fn build(self) -> Result<KnowledgeStore, CorpusError> {
        let mut category_names = HashSet::new();
        for category in &self.categories {
            if !category_names.insert(category.name()) {
                return Err(CorpusError::DuplicateCategory {
                    name: category.name().to_owned(),
                });
            }
        }

        let mut content = HashMap::with_capacity(self.topics.len());
        for topic in self.topics {
            if content.contains_key(topic.name()) {
                return Err(CorpusError::DuplicateTopic {
                    name: topic.name().to_owned(),
                });
            }
            content.insert(topic.name().to_owned(), topic.content().to_owned());
        }

        for category in &self.categories {
            for topic in category.topics() {
                if !content.contains_key(topic) {
                    return Err(CorpusError::MissingContent {
                        category: category.name().to_owned(),
                        topic: topic.clone(),
                    });
                }
            }
        }

        let mut quiz_names = HashSet::new();
        for quiz in &self.quizzes {
            if !quiz_names.insert(quiz.name()) {
                return Err(CorpusError::DuplicateQuiz {
                    name: quiz.name().to_owned(),
                });
            }
        }

        Ok(KnowledgeStore {
            categories: self.categories,
            content,
            quizzes: self.quizzes,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, correct: usize) -> Question {
        Question::new(prompt, ["a", "b", "c", "d"], correct).unwrap()
    }

    fn small_store() -> KnowledgeStore {
        KnowledgeStore::builder()
            .category(Category::new("Static Testing", ["Review Process", "Static Analysis"]).unwrap())
            .category(Category::new("Test Management", ["Defect Management"]).unwrap())
            .topic(Topic::new("Review Process", "Planning, kick-off, preparation.").unwrap())
            .topic(Topic::new("Static Analysis", "Examining code without executing it.").unwrap())
            .topic(Topic::new("Defect Management", "Detection through closure.").unwrap())
            .quiz(Quiz::new("Static Testing", vec![question("Q1?", 0), question("Q2?", 3)]).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn lookups_are_order_stable() {
        let store = small_store();

        let names: Vec<&str> = store.categories().iter().map(Category::name).collect();
        assert_eq!(names, ["Static Testing", "Test Management"]);

        // Repeated calls observe the same order.
        assert_eq!(store.topics("Static Testing"), store.topics("Static Testing"));
        assert_eq!(store.topics("Static Testing"), ["Review Process", "Static Analysis"]);
        assert_eq!(store.questions("Static Testing").len(), 2);
        assert_eq!(store.questions("Static Testing")[1].correct_index(), 3);
    }

    #[test]
    fn unknown_category_yields_empty_slices() {
        let store = small_store();

        assert!(store.topics("Agile Testing").is_empty());
        assert!(store.questions("Agile Testing").is_empty());
        assert!(store.questions("Test Management").is_empty());
    }

    #[test]
    fn unknown_topic_yields_placeholder() {
        let store = small_store();

        assert_eq!(store.content("Mutation Testing"), MISSING_CONTENT);
        assert_eq!(
            store.content("Static Analysis"),
            "Examining code without executing it."
        );
    }

    #[test]
    fn build_rejects_duplicate_category() {
        let err = KnowledgeStore::builder()
            .category(Category::new("Static Testing", ["Review Process"]).unwrap())
            .category(Category::new("Static Testing", ["Static Analysis"]).unwrap())
            .build()
            .unwrap_err();

        assert!(matches!(err, CorpusError::DuplicateCategory { .. }));
    }

    #[test]
    fn build_rejects_duplicate_topic() {
        let err = KnowledgeStore::builder()
            .topic(Topic::new("Static Analysis", "One.").unwrap())
            .topic(Topic::new("Static Analysis", "Two.").unwrap())
            .build()
            .unwrap_err();

        assert!(matches!(err, CorpusError::DuplicateTopic { .. }));
    }

    #[test]
    fn build_rejects_listed_topic_without_content() {
        let err = KnowledgeStore::builder()
            .category(Category::new("Static Testing", ["Review Process"]).unwrap())
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            CorpusError::MissingContent { category, topic }
                if category == "Static Testing" && topic == "Review Process"
        ));
    }

    #[test]
    fn build_rejects_duplicate_quiz() {
        let err = KnowledgeStore::builder()
            .quiz(Quiz::new("Static Testing", vec![question("Q1?", 0)]).unwrap())
            .quiz(Quiz::new("Static Testing", vec![question("Q2?", 1)]).unwrap())
            .build()
            .unwrap_err();

        assert!(matches!(err, CorpusError::DuplicateQuiz { .. }));
    }
}
