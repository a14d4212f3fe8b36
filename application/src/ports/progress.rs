//! Progress notification port
//!
//! Defines the interface for reporting progress while questions are supplied.

use quizforge_domain::{MaturityTier, QuestionKey};

/// Callback for progress updates during a supply run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait SupplyProgressNotifier: Send + Sync {
    /// Called after the store was consulted
    fn on_store_lookup(&self, key: &QuestionKey, store_count: usize, tier: MaturityTier);

    /// Called before the generator is asked for `count` questions
    fn on_generation_start(&self, key: &QuestionKey, count: usize);

    /// Called when the generator call finished
    fn on_generation_complete(&self, key: &QuestionKey, produced: usize, success: bool);

    /// Called when the run finished, with the number of questions returned
    fn on_supply_complete(&self, _key: &QuestionKey, _returned: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoSupplyProgress;

impl SupplyProgressNotifier for NoSupplyProgress {
    fn on_store_lookup(&self, _key: &QuestionKey, _store_count: usize, _tier: MaturityTier) {}
    fn on_generation_start(&self, _key: &QuestionKey, _count: usize) {}
    fn on_generation_complete(&self, _key: &QuestionKey, _produced: usize, _success: bool) {}
}
