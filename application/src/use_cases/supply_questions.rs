//! Supply Questions use case
//!
//! Blends previously stored questions with freshly generated ones.
//!
//! # Flow
//!
//! 1. Count stored questions for the (topic, difficulty) key
//! 2. Ask the [`ReusePolicy`](quizforge_domain::ReusePolicy) how many to reuse
//! 3. Fetch them; the store may hand back fewer than asked
//! 4. Generate the remainder and write it through to the store
//! 5. Shuffle store-sourced and generated questions together
//!
//! If generation fails but the store contributed something, the stored
//! questions are returned as a partial result. Only when nothing at all is
//! available does the run fail with [`SupplyError::GenerationFailed`].

use crate::config::SupplyConfig;
use crate::ports::progress::{NoSupplyProgress, SupplyProgressNotifier};
use crate::ports::question_generator::QuestionGenerator;
use crate::ports::question_store::{QuestionStore, StoreError};
use quizforge_domain::core::string::preview;
use quizforge_domain::{DifficultyLevel, GenerationRequest, Provenance, Question, SupplyOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while supplying questions
#[derive(Error, Debug)]
pub enum SupplyError {
    /// Nothing could be generated and the store had nothing usable either
    #[error("Could not generate questions for this topic, try again")]
    GenerationFailed { reason: String },

    /// The store could not be read or written
    #[error("Question store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl SupplyError {
    /// Check if this error is a content problem rather than an infrastructure one
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, SupplyError::GenerationFailed { .. })
    }
}

/// Use case for supplying a batch of questions
pub struct SupplyQuestionsUseCase<S: QuestionStore + ?Sized, G: QuestionGenerator> {
    store: Arc<S>,
    generator: Arc<G>,
    config: SupplyConfig,
    rng: Mutex<StdRng>,
}

impl<S: QuestionStore + ?Sized, G: QuestionGenerator> SupplyQuestionsUseCase<S, G> {
    pub fn new(store: Arc<S>, generator: Arc<G>, config: SupplyConfig) -> Self {
        Self {
            store,
            generator,
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Use a seeded shuffle (reproducible ordering)
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn config(&self) -> &SupplyConfig {
        &self.config
    }

    /// Execute the use case with default (no-op) progress
    pub async fn supply<D: DifficultyLevel>(
        &self,
        request: &GenerationRequest<D>,
    ) -> Result<SupplyOutcome, SupplyError> {
        self.supply_with_progress(request, &NoSupplyProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn supply_with_progress<D: DifficultyLevel>(
        &self,
        request: &GenerationRequest<D>,
        progress: &dyn SupplyProgressNotifier,
    ) -> Result<SupplyOutcome, SupplyError> {
        let key = request.key();
        let policy = &self.config.policy;

        let store_count = self.store.count_for(&key).await?;
        let tier = policy.tier(store_count);
        let fetch_count = policy.fetch_count(store_count, request.count);
        progress.on_store_lookup(&key, store_count, tier);

        info!(
            "Supplying {} questions for {} ({} stored, {} tier, reusing up to {})",
            request.count, key, store_count, tier, fetch_count
        );

        let mut stored = if fetch_count > 0 {
            self.store.fetch(&key, fetch_count).await?
        } else {
            Vec::new()
        };
        stored.truncate(fetch_count);
        debug!("Store returned {} of {} requested", stored.len(), fetch_count);

        let remaining = request.count.saturating_sub(stored.len());
        let mut tagged: Vec<(Provenance, Question)> = stored
            .into_iter()
            .map(|q| (Provenance::Store, q))
            .collect();

        if remaining > 0 {
            progress.on_generation_start(&key, remaining);

            match self.generator.generate(&request.with_count(remaining)).await {
                Ok(mut generated) if !generated.is_empty() => {
                    if generated.len() > remaining {
                        debug!(
                            "Generator returned {} questions, keeping {}",
                            generated.len(),
                            remaining
                        );
                        generated.truncate(remaining);
                    }
                    progress.on_generation_complete(&key, generated.len(), true);

                    // Write-through: every generated question becomes reusable
                    self.store.append(&key, &generated).await?;
                    for q in &generated {
                        debug!("Generated: {}", preview(q.question(), 80));
                    }
                    tagged.extend(generated.into_iter().map(|q| (Provenance::Generated, q)));
                }
                result => {
                    let reason = match result {
                        Err(e) => e.to_string(),
                        Ok(_) => "generator returned no questions".to_string(),
                    };
                    progress.on_generation_complete(&key, 0, false);

                    if tagged.is_empty() {
                        warn!("Generation failed for {} with nothing stored: {}", key, reason);
                        return Err(SupplyError::GenerationFailed { reason });
                    }
                    warn!(
                        "Generation failed for {}: {}; returning {} stored questions",
                        key,
                        reason,
                        tagged.len()
                    );
                }
            }
        }

        self.shuffle(&mut tagged);

        let outcome = SupplyOutcome::from_tagged(tagged, request.count, tier);
        progress.on_supply_complete(&key, outcome.len());
        info!(
            "Supplied {} questions for {} ({} stored, {} generated)",
            outcome.len(),
            key,
            outcome.from_store(),
            outcome.generated()
        );
        Ok(outcome)
    }

    /// Uniform Fisher-Yates shuffle
    fn shuffle<T>(&self, items: &mut [T]) {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        items.shuffle(&mut *rng);
    }
}
