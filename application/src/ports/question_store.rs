//! Question Store port
//!
//! Defines the interface of the persistent collection of previously
//! generated questions. From the application's point of view the store is
//! append-only: nothing here updates or deletes stored questions.

use async_trait::async_trait;
use quizforge_domain::{Question, QuestionKey};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store record: {0}")]
    Corrupt(String),
}

/// Port for the question store
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Number of questions stored for the key
    async fn count_for(&self, key: &QuestionKey) -> Result<usize, StoreError>;

    /// Up to `limit` stored questions for the key
    ///
    /// May return fewer than `limit`.
    async fn fetch(&self, key: &QuestionKey, limit: usize) -> Result<Vec<Question>, StoreError>;

    /// Append questions under the key
    async fn append(&self, key: &QuestionKey, questions: &[Question]) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: QuestionStore + ?Sized> QuestionStore for Arc<T> {
    async fn count_for(&self, key: &QuestionKey) -> Result<usize, StoreError> {
        (**self).count_for(key).await
    }

    async fn fetch(&self, key: &QuestionKey, limit: usize) -> Result<Vec<Question>, StoreError> {
        (**self).fetch(key, limit).await
    }

    async fn append(&self, key: &QuestionKey, questions: &[Question]) -> Result<(), StoreError> {
        (**self).append(key, questions).await
    }
}
