//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Unknown difficulty '{value}' (expected one of: {expected})")]
    UnknownDifficulty { value: String, expected: String },

    #[error("Invalid reuse policy: {0}")]
    InvalidPolicy(String),
}

impl DomainError {
    /// Check if this error was raised while validating a question
    pub fn is_invalid_question(&self) -> bool {
        matches!(self, DomainError::InvalidQuestion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_difficulty_display() {
        let error = DomainError::UnknownDifficulty {
            value: "brutal".to_string(),
            expected: "easy, medium, hard".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown difficulty 'brutal' (expected one of: easy, medium, hard)"
        );
    }

    #[test]
    fn test_is_invalid_question_check() {
        assert!(DomainError::InvalidQuestion("x".to_string()).is_invalid_question());
        assert!(!DomainError::EmptyTopic.is_invalid_question());
    }
}
