//! Maturity-tiered reuse policy.
//!
//! Decides what share of a request may be served from previously stored
//! questions, based on how many the store already holds for the key.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored-question count at which a partition is considered mature
pub const DEFAULT_MATURE_THRESHOLD: usize = 200;
/// Reuse fraction for mature partitions
pub const DEFAULT_MATURE_RATIO: f64 = 0.70;
/// Reuse fraction for partitions that hold some, but not many, questions
pub const DEFAULT_INITIAL_RATIO: f64 = 0.30;

/// Maturity tier of a store partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityTier {
    /// Nothing stored yet
    Empty,
    /// Some questions stored; rely mostly on fresh generation
    Initial,
    /// Plenty stored; rely mostly on the store
    Mature,
}

impl fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaturityTier::Empty => write!(f, "empty"),
            MaturityTier::Initial => write!(f, "initial"),
            MaturityTier::Mature => write!(f, "mature"),
        }
    }
}

/// Reuse policy (Value Object)
///
/// # Example
///
/// ```
/// use quizforge_domain::ReusePolicy;
///
/// let policy = ReusePolicy::default();
/// // mature partition: ceil(10 * 0.7) = 7 from the store
/// assert_eq!(policy.fetch_count(300, 10), 7);
/// // thin partition: ceil(10 * 0.3) = 3
/// assert_eq!(policy.fetch_count(50, 10), 3);
/// // never more than the store holds
/// assert_eq!(policy.fetch_count(2, 10), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReusePolicy")]
pub struct ReusePolicy {
    mature_threshold: usize,
    mature_ratio: f64,
    initial_ratio: f64,
}

/// Unvalidated wire shape of a policy.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawReusePolicy {
    mature_threshold: usize,
    mature_ratio: f64,
    initial_ratio: f64,
}

impl TryFrom<RawReusePolicy> for ReusePolicy {
    type Error = DomainError;

    fn try_from(raw: RawReusePolicy) -> Result<Self, Self::Error> {
        ReusePolicy::new(raw.mature_threshold, raw.mature_ratio, raw.initial_ratio)
    }
}

impl Default for ReusePolicy {
    fn default() -> Self {
        Self {
            mature_threshold: DEFAULT_MATURE_THRESHOLD,
            mature_ratio: DEFAULT_MATURE_RATIO,
            initial_ratio: DEFAULT_INITIAL_RATIO,
        }
    }
}

impl ReusePolicy {
    /// Create a policy, validating that both ratios lie in `0.0..=1.0`
    pub fn new(
        mature_threshold: usize,
        mature_ratio: f64,
        initial_ratio: f64,
    ) -> Result<Self, DomainError> {
        for (name, ratio) in [("mature_ratio", mature_ratio), ("initial_ratio", initial_ratio)] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(DomainError::InvalidPolicy(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, ratio
                )));
            }
        }
        if mature_threshold == 0 {
            return Err(DomainError::InvalidPolicy(
                "mature_threshold must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            mature_threshold,
            mature_ratio,
            initial_ratio,
        })
    }

    pub fn mature_threshold(&self) -> usize {
        self.mature_threshold
    }

    pub fn mature_ratio(&self) -> f64 {
        self.mature_ratio
    }

    pub fn initial_ratio(&self) -> f64 {
        self.initial_ratio
    }

    /// Classify a partition by how many questions it holds
    pub fn tier(&self, store_count: usize) -> MaturityTier {
        if store_count == 0 {
            MaturityTier::Empty
        } else if store_count >= self.mature_threshold {
            MaturityTier::Mature
        } else {
            MaturityTier::Initial
        }
    }

    /// Target reuse fraction for a partition of the given size
    pub fn reuse_fraction(&self, store_count: usize) -> f64 {
        match self.tier(store_count) {
            MaturityTier::Empty => 0.0,
            MaturityTier::Initial => self.initial_ratio,
            MaturityTier::Mature => self.mature_ratio,
        }
    }

    /// Number of questions to request from the store:
    /// `min(store_count, ceil(count * fraction))`
    pub fn fetch_count(&self, store_count: usize, count: usize) -> usize {
        let fraction = self.reuse_fraction(store_count);
        let wanted = ceil_fraction(count, fraction);
        wanted.min(store_count)
    }
}

/// `ceil(count * fraction)` with float noise trimmed, so 10 * 0.7 is 7 and
/// not 8 (0.7 is not exactly representable).
fn ceil_fraction(count: usize, fraction: f64) -> usize {
    let product = count as f64 * fraction;
    let rounded = product.round();
    if (product - rounded).abs() < 1e-9 {
        rounded as usize
    } else {
        product.ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_validates_ranges() {
        let policy: ReusePolicy = serde_json::from_str(
            r#"{"mature_threshold": 50, "mature_ratio": 0.9, "initial_ratio": 0.1}"#,
        )
        .unwrap();
        assert_eq!(policy.mature_threshold(), 50);

        let too_high = serde_json::from_str::<ReusePolicy>(
            r#"{"mature_threshold": 50, "mature_ratio": 1.5, "initial_ratio": 0.1}"#,
        );
        assert!(too_high.is_err());

        let zero_threshold = serde_json::from_str::<ReusePolicy>(
            r#"{"mature_threshold": 0, "mature_ratio": 0.7, "initial_ratio": 0.3}"#,
        );
        assert!(zero_threshold.is_err());
    }

    #[test]
    fn test_tiers() {
        let policy = ReusePolicy::default();
        assert_eq!(policy.tier(0), MaturityTier::Empty);
        assert_eq!(policy.tier(1), MaturityTier::Initial);
        assert_eq!(policy.tier(199), MaturityTier::Initial);
        assert_eq!(policy.tier(200), MaturityTier::Mature);
        assert_eq!(policy.tier(5000), MaturityTier::Mature);
    }

    #[test]
    fn test_fetch_count_scenarios() {
        let policy = ReusePolicy::default();
        assert_eq!(policy.fetch_count(0, 5), 0);
        assert_eq!(policy.fetch_count(300, 10), 7);
        assert_eq!(policy.fetch_count(50, 10), 3);
        assert_eq!(policy.fetch_count(200, 1), 1);
        assert_eq!(policy.fetch_count(10, 1), 1);
    }

    #[test]
    fn test_fetch_count_rounds_up() {
        let policy = ReusePolicy::default();
        // 7 * 0.3 = 2.1 -> 3
        assert_eq!(policy.fetch_count(50, 7), 3);
        // 3 * 0.7 = 2.1 -> 3
        assert_eq!(policy.fetch_count(250, 3), 3);
    }

    #[test]
    fn test_fetch_count_capped_by_store() {
        let policy = ReusePolicy::default();
        assert_eq!(policy.fetch_count(1, 20), 1);
    }

    #[test]
    fn test_fetch_count_zero_request() {
        let policy = ReusePolicy::default();
        assert_eq!(policy.fetch_count(300, 0), 0);
    }

    #[test]
    fn test_custom_policy() {
        let policy = ReusePolicy::new(10, 1.0, 0.5).unwrap();
        assert_eq!(policy.fetch_count(10, 4), 4);
        assert_eq!(policy.fetch_count(9, 4), 2);
    }

    #[test]
    fn test_invalid_policy() {
        assert!(ReusePolicy::new(200, 1.5, 0.3).is_err());
        assert!(ReusePolicy::new(200, 0.7, -0.1).is_err());
        assert!(ReusePolicy::new(0, 0.7, 0.3).is_err());
    }
}
