//! Supply configuration from TOML (`[supply]` section)

use quizforge_application::config::DEFAULT_MAX_COUNT;
use quizforge_domain::supply::{DEFAULT_INITIAL_RATIO, DEFAULT_MATURE_RATIO, DEFAULT_MATURE_THRESHOLD};
use quizforge_domain::{DomainError, ReusePolicy};
use serde::{Deserialize, Serialize};

/// Raw supply configuration from TOML
///
/// # Example
///
/// ```toml
/// [supply]
/// mature_threshold = 200
/// mature_ratio = 0.7
/// initial_ratio = 0.3
/// max_count = 50
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSupplyConfig {
    /// Stored-question count at which a partition counts as mature
    pub mature_threshold: usize,
    /// Share of a request served from a mature partition
    pub mature_ratio: f64,
    /// Share of a request served from a thin partition
    pub initial_ratio: f64,
    /// Largest count a single request may ask for
    pub max_count: usize,
    /// Time budget for one whole supply run
    pub timeout_seconds: Option<u64>,
}

impl Default for FileSupplyConfig {
    fn default() -> Self {
        Self {
            mature_threshold: DEFAULT_MATURE_THRESHOLD,
            mature_ratio: DEFAULT_MATURE_RATIO,
            initial_ratio: DEFAULT_INITIAL_RATIO,
            max_count: DEFAULT_MAX_COUNT,
            timeout_seconds: None,
        }
    }
}

impl FileSupplyConfig {
    /// Build the domain reuse policy
    pub fn to_policy(&self) -> Result<ReusePolicy, DomainError> {
        ReusePolicy::new(self.mature_threshold, self.mature_ratio, self.initial_ratio)
    }
}
