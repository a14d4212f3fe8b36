//! Question Generator port
//!
//! Defines the interface for the generative service that writes new
//! multiple-choice questions on demand.

use async_trait::async_trait;
use quizforge_domain::{DifficultyLevel, GenerationRequest, Question};
use thiserror::Error;

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Generator returned an empty response")]
    EmptyResponse,

    #[error("Generator output did not match the question schema: {0}")]
    InvalidOutput(String),

    #[error("Timeout")]
    Timeout,
}

/// Port for question generation
///
/// Implementations must only return questions that passed validation
/// (the [`Question`] type guarantees this) and at most `request.count` of them.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generate up to `request.count` new questions
    async fn generate<D: DifficultyLevel>(
        &self,
        request: &GenerationRequest<D>,
    ) -> Result<Vec<Question>, GenerationError>;
}
