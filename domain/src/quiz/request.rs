//! Store keys and generation requests

use crate::core::topic::Topic;
use crate::quiz::difficulty::{DifficultyLevel, DifficultyScale};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Partition key of the question store: (topic, difficulty).
///
/// The difficulty is recorded as scale + label so values of the two
/// difficulty enumerations never land in the same partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionKey {
    pub topic: Topic,
    pub scale: DifficultyScale,
    #[serde(rename = "difficulty")]
    pub level: String,
}

impl QuestionKey {
    pub fn new<D: DifficultyLevel>(topic: Topic, difficulty: D) -> Self {
        Self {
            topic,
            scale: D::SCALE,
            level: difficulty.label().to_string(),
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}:{}]", self.topic, self.scale, self.level)
    }
}

/// Unit of work sent to the generative service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest<D: DifficultyLevel> {
    pub topic: Topic,
    pub difficulty: D,
    pub count: usize,
}

impl<D: DifficultyLevel> GenerationRequest<D> {
    pub fn new(topic: Topic, difficulty: D, count: usize) -> Self {
        Self {
            topic,
            difficulty,
            count,
        }
    }

    /// Store partition this request reads from and writes to
    pub fn key(&self) -> QuestionKey {
        QuestionKey::new(self.topic.clone(), self.difficulty)
    }

    /// Same topic and difficulty, different count
    pub fn with_count(&self, count: usize) -> Self {
        Self {
            topic: self.topic.clone(),
            difficulty: self.difficulty,
            count,
        }
    }
}
