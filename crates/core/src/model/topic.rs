use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic name cannot be empty")]
    EmptyName,

    #[error("topic content cannot be empty")]
    EmptyContent,
}

/// A single content unit with displayable text.
///
/// Identity is the name, unique across the whole store; content lookup is by
/// topic name alone, independent of the owning category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    name: String,
    content: String,
}

impl Topic {
    /// Creates a validated topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyName` or `TopicError::EmptyContent` for blank input.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Result<Self, TopicError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TopicError::EmptyName);
        }

        let content = content.into();
        if content.trim().is_empty() {
            return Err(TopicError::EmptyContent);
        }

        Ok(Self { name, content })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_requires_name_and_content() {
        assert!(matches!(
            Topic::new("", "text").unwrap_err(),
            TopicError::EmptyName
        ));
        assert!(matches!(
            Topic::new("Static Analysis", "  ").unwrap_err(),
            TopicError::EmptyContent
        ));

        let topic = Topic::new("Static Analysis", "Examining code without executing it.").unwrap();
        assert_eq!(topic.name(), "Static Analysis");
    }
}
