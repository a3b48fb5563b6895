use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category topic name cannot be empty")]
    EmptyTopicName,

    #[error("duplicate topic {name:?} in category")]
    DuplicateTopic { name: String },
}

/// A top-level grouping of topics.
///
/// Identity is the name, unique across the store. Topic order is the
/// authored display order and is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    topics: Vec<String>,
}

impl Category {
    /// Creates a validated category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` for a blank category name,
    /// `CategoryError::EmptyTopicName` for a blank topic name, and
    /// `CategoryError::DuplicateTopic` if a topic name repeats.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        topics: impl IntoIterator<Item = S>,
    ) -> Result<Self, CategoryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryError::EmptyName);
        }

        let topics: Vec<String> = topics.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for topic in &topics {
            if topic.trim().is_empty() {
                return Err(CategoryError::EmptyTopicName);
            }
            if !seen.insert(topic.as_str()) {
                return Err(CategoryError::DuplicateTopic {
                    name: topic.clone(),
                });
            }
        }

        Ok(Self { name, topics })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Topic names in display order.
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}
