//! Generate MCQ action
//!
//! Caller-facing boundary around [`SupplyQuestionsUseCase`]: validates the
//! raw input, applies the optional timeout and translates every outcome into
//! the two-case [`McqResponse`]. No collaborator error escapes undecorated.

use crate::ports::progress::{NoSupplyProgress, SupplyProgressNotifier};
use crate::ports::question_generator::QuestionGenerator;
use crate::ports::question_store::QuestionStore;
use crate::use_cases::supply_questions::{SupplyError, SupplyQuestionsUseCase};
use futures::future::join_all;
use quizforge_domain::{
    BulkDifficulty, Difficulty, DifficultyLevel, GenerationRequest, MaturityTier, Question,
    SupplyOutcome, Topic,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// User-facing message for content failures
pub const GENERATION_FAILED_MESSAGE: &str =
    "Could not generate questions for this topic, try again.";
/// User-facing message for store failures
pub const STORE_UNAVAILABLE_MESSAGE: &str =
    "The question store is unavailable right now, please try again later.";
/// User-facing message when the whole run exceeded its time budget
pub const TIMEOUT_MESSAGE: &str = "Generating questions took too long, try again.";

/// Raw request from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McqInput<D> {
    pub topic: String,
    pub difficulty: D,
    pub count: usize,
}

impl<D> McqInput<D> {
    pub fn new(topic: impl Into<String>, difficulty: D, count: usize) -> Self {
        Self {
            topic: topic.into(),
            difficulty,
            count,
        }
    }
}

/// Response body: either `{"questions": [...]}` or `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum McqResponse {
    Questions {
        questions: Vec<Question>,
        /// Set when fewer questions than requested could be supplied
        #[serde(skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
    },
    Error {
        error: String,
    },
}

impl McqResponse {
    pub fn error(message: impl Into<String>) -> Self {
        McqResponse::Error {
            error: message.into(),
        }
    }

    fn from_outcome(outcome: SupplyOutcome) -> Self {
        let warning = outcome.is_partial().then(|| {
            format!(
                "Only {} of {} questions could be supplied",
                outcome.len(),
                outcome.requested
            )
        });
        McqResponse::Questions {
            questions: outcome.into_questions(),
            warning,
        }
    }

    fn from_error(error: &SupplyError) -> Self {
        match error {
            SupplyError::GenerationFailed { .. } => Self::error(GENERATION_FAILED_MESSAGE),
            SupplyError::StoreUnavailable(_) => Self::error(STORE_UNAVAILABLE_MESSAGE),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, McqResponse::Error { .. })
    }

    /// Supplied questions (empty for errors)
    pub fn questions(&self) -> &[Question] {
        match self {
            McqResponse::Questions { questions, .. } => questions,
            McqResponse::Error { .. } => &[],
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            McqResponse::Questions { warning, .. } => warning.as_deref(),
            McqResponse::Error { .. } => None,
        }
    }
}

/// Caller-facing quiz generation action
pub struct GenerateMcqAction<S: QuestionStore + ?Sized, G: QuestionGenerator> {
    use_case: SupplyQuestionsUseCase<S, G>,
}

impl<S: QuestionStore + ?Sized, G: QuestionGenerator> GenerateMcqAction<S, G> {
    pub fn new(use_case: SupplyQuestionsUseCase<S, G>) -> Self {
        Self { use_case }
    }

    /// Simple flow (easy / medium / hard)
    pub async fn generate_mcq(&self, input: McqInput<Difficulty>) -> McqResponse {
        self.generate_mcq_with_progress(input, &NoSupplyProgress).await
    }

    pub async fn generate_mcq_with_progress(
        &self,
        input: McqInput<Difficulty>,
        progress: &dyn SupplyProgressNotifier,
    ) -> McqResponse {
        self.run(input, progress).await
    }

    /// Bulk flow (easy / moderate / difficult / extreme)
    ///
    /// A zero count returns an empty question list without touching the
    /// store or the generator.
    pub async fn generate_bulk(&self, input: McqInput<BulkDifficulty>) -> McqResponse {
        self.generate_bulk_with_progress(input, &NoSupplyProgress).await
    }

    pub async fn generate_bulk_with_progress(
        &self,
        input: McqInput<BulkDifficulty>,
        progress: &dyn SupplyProgressNotifier,
    ) -> McqResponse {
        if input.count == 0 {
            return McqResponse::from_outcome(SupplyOutcome::empty(MaturityTier::Empty));
        }
        self.run(input, progress).await
    }

    /// Run several bulk requests concurrently, answering in input order
    pub async fn generate_bulk_many(&self, inputs: Vec<McqInput<BulkDifficulty>>) -> Vec<McqResponse> {
        info!("Running {} bulk requests", inputs.len());
        join_all(inputs.into_iter().map(|input| self.generate_bulk(input))).await
    }

    async fn run<D: DifficultyLevel>(
        &self,
        input: McqInput<D>,
        progress: &dyn SupplyProgressNotifier,
    ) -> McqResponse {
        let topic = match Topic::new(input.topic) {
            Ok(t) => t,
            Err(e) => return McqResponse::error(e.to_string()),
        };

        let max_count = self.use_case.config().max_count;
        if input.count > max_count {
            return McqResponse::error(format!(
                "At most {} questions can be requested at once",
                max_count
            ));
        }

        let request = GenerationRequest::new(topic, input.difficulty, input.count);
        let supply = self.use_case.supply_with_progress(&request, progress);

        let result = match self.use_case.config().timeout {
            Some(limit) => match tokio::time::timeout(limit, supply).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Supply for {} timed out after {:?}", request.key(), limit);
                    return McqResponse::error(TIMEOUT_MESSAGE);
                }
            },
            None => supply.await,
        };

        match result {
            Ok(outcome) => McqResponse::from_outcome(outcome),
            Err(e) => {
                warn!("Supply for {} failed: {}", request.key(), e);
                McqResponse::from_error(&e)
            }
        }
    }
}
