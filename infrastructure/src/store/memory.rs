//! Process-local question store.

use async_trait::async_trait;
use quizforge_application::ports::question_store::{QuestionStore, StoreError};
use quizforge_domain::{Question, QuestionKey};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory question store.
///
/// `fetch` hands out a random sample of the partition so repeated requests
/// see different stored questions.
#[derive(Default)]
pub struct InMemoryQuestionStore {
    partitions: RwLock<HashMap<QuestionKey, Vec<Question>>>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with questions
    pub fn with_questions(
        entries: impl IntoIterator<Item = (QuestionKey, Vec<Question>)>,
    ) -> Self {
        Self {
            partitions: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Total number of questions across all partitions
    pub async fn total(&self) -> usize {
        self.partitions.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn count_for(&self, key: &QuestionKey) -> Result<usize, StoreError> {
        Ok(self.partitions.read().await.get(key).map_or(0, Vec::len))
    }

    async fn fetch(&self, key: &QuestionKey, limit: usize) -> Result<Vec<Question>, StoreError> {
        let partitions = self.partitions.read().await;
        let Some(questions) = partitions.get(key) else {
            return Ok(Vec::new());
        };
        let mut rng = rand::thread_rng();
        Ok(questions.choose_multiple(&mut rng, limit).cloned().collect())
    }

    async fn append(&self, key: &QuestionKey, questions: &[Question]) -> Result<(), StoreError> {
        if questions.is_empty() {
            return Ok(());
        }
        self.partitions
            .write()
            .await
            .entry(key.clone())
            .or_default()
            .extend_from_slice(questions);
        Ok(())
    }
}
