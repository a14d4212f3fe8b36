//! Multiple-choice question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question (Value Object)
///
/// Always holds non-empty text, exactly [`OPTION_COUNT`] options and a
/// correct answer that is one of those options. Deserialization goes through
/// the same validation as [`Question::new`], so a `Question` read back from a
/// store or parsed from model output is valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion", rename_all = "camelCase")]
pub struct Question {
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

/// Unvalidated wire shape of a question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(alias = "correct_answer")]
    pub correct_answer: String,
}

impl Question {
    /// Create a new question, validating its shape
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        let correct_answer = correct_answer.into();

        if question.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text is empty".to_string(),
            ));
        }
        if options.len() != OPTION_COUNT {
            return Err(DomainError::InvalidQuestion(format!(
                "expected {} options, got {}",
                OPTION_COUNT,
                options.len()
            )));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(DomainError::InvalidQuestion(
                "options cannot be empty".to_string(),
            ));
        }
        if !options.contains(&correct_answer) {
            return Err(DomainError::InvalidQuestion(format!(
                "correct answer '{}' is not one of the options",
                correct_answer
            )));
        }

        Ok(Self {
            question,
            options,
            correct_answer,
        })
    }

    /// Get the question text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the options in presentation order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Get the correct answer text
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Index of the correct answer within [`Question::options`]
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| o == &self.correct_answer)
            .unwrap_or_default()
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = DomainError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw.question, raw.options, raw.correct_answer)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["3".into(), "4".into(), "5".into(), "22".into()]
    }

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is 2 + 2?", options(), "4").unwrap();
        assert_eq!(q.question(), "What is 2 + 2?");
        assert_eq!(q.options().len(), 4);
        assert_eq!(q.correct_answer(), "4");
        assert_eq!(q.correct_index(), 1);
    }

    #[test]
    fn test_empty_question_rejected() {
        let err = Question::new("   ", options(), "4").unwrap_err();
        assert!(err.is_invalid_question());
    }

    #[test]
    fn test_wrong_option_count_rejected() {
        let err = Question::new("Q?", vec!["a".into(), "b".into()], "a").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidQuestion("expected 4 options, got 2".to_string())
        );
    }

    #[test]
    fn test_answer_must_be_an_option() {
        assert!(Question::new("Q?", options(), "7").is_err());
    }

    #[test]
    fn test_serialize_camel_case() {
        let q = Question::new("What is 2 + 2?", options(), "4").unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["correctAnswer"], "4");
        assert_eq!(json["question"], "What is 2 + 2?");
    }

    #[test]
    fn test_deserialize_validates() {
        let bad = r#"{"question":"Q?","options":["a","b","c","d"],"correctAnswer":"e"}"#;
        assert!(serde_json::from_str::<Question>(bad).is_err());

        let good = r#"{"question":"Q?","options":["a","b","c","d"],"correct_answer":"c"}"#;
        let q: Question = serde_json::from_str(good).unwrap();
        assert_eq!(q.correct_index(), 2);
    }
}
