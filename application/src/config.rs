//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the reuse policy thresholds and request limits.

use quizforge_domain::ReusePolicy;
use std::time::Duration;

/// Largest question count a single request may ask for
pub const DEFAULT_MAX_COUNT: usize = 50;

/// Supply behavior configuration.
///
/// The reuse policy is injected here rather than hard-coded in the use case,
/// so tier thresholds can change through configuration.
#[derive(Debug, Clone)]
pub struct SupplyConfig {
    /// Maturity tiers and reuse fractions
    pub policy: ReusePolicy,
    /// Requests above this count are rejected by the action layer
    pub max_count: usize,
    /// Upper bound for a whole supply run, applied by the action layer
    pub timeout: Option<Duration>,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            policy: ReusePolicy::default(),
            max_count: DEFAULT_MAX_COUNT,
            timeout: None,
        }
    }
}

impl SupplyConfig {
    pub fn with_policy(mut self, policy: ReusePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Creates a SupplyConfig timeout from an optional value in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SupplyConfig::default();
        assert_eq!(config.max_count, 50);
        assert_eq!(config.policy.mature_threshold(), 200);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_timeout_seconds() {
        let config = SupplyConfig::default().with_timeout_seconds(Some(30));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
