//! Difficulty scales.
//!
//! Two closed enumerations exist and are never interchangeable:
//!
//! - [`Difficulty`]: `easy | medium | hard`, used by the simple quiz flow
//! - [`BulkDifficulty`]: `easy | moderate | difficult | extreme`, used by bulk generation
//!
//! Both label themselves with a [`DifficultyScale`] so a store can keep their
//! partitions apart even where labels coincide (`easy`).

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which enumeration a difficulty label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyScale {
    Simple,
    Bulk,
}

impl DifficultyScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyScale::Simple => "simple",
            DifficultyScale::Bulk => "bulk",
        }
    }
}

impl fmt::Display for DifficultyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of both difficulty enumerations.
pub trait DifficultyLevel: Copy + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The enumeration this value belongs to
    const SCALE: DifficultyScale;

    /// Stable lowercase label (used as part of the store key and in prompts)
    fn label(&self) -> &'static str;

    /// Short guidance for the generator about how hard questions should be
    fn guidance(&self) -> &'static str;
}

/// Difficulty for the simple quiz flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl DifficultyLevel for Difficulty {
    const SCALE: DifficultyScale = DifficultyScale::Simple;

    fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    fn guidance(&self) -> &'static str {
        match self {
            Difficulty::Easy => "basic recall of well-known facts and definitions",
            Difficulty::Medium => "application of concepts that requires some understanding",
            Difficulty::Hard => "multi-step reasoning and less commonly known details",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownDifficulty {
                value: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            })
    }
}

/// Difficulty for the bulk generation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkDifficulty {
    Easy,
    #[default]
    Moderate,
    Difficult,
    Extreme,
}

impl BulkDifficulty {
    pub const ALL: [BulkDifficulty; 4] = [
        BulkDifficulty::Easy,
        BulkDifficulty::Moderate,
        BulkDifficulty::Difficult,
        BulkDifficulty::Extreme,
    ];
}

impl DifficultyLevel for BulkDifficulty {
    const SCALE: DifficultyScale = DifficultyScale::Bulk;

    fn label(&self) -> &'static str {
        match self {
            BulkDifficulty::Easy => "easy",
            BulkDifficulty::Moderate => "moderate",
            BulkDifficulty::Difficult => "difficult",
            BulkDifficulty::Extreme => "extreme",
        }
    }

    fn guidance(&self) -> &'static str {
        match self {
            BulkDifficulty::Easy => "introductory questions suitable for beginners",
            BulkDifficulty::Moderate => "questions for someone with working knowledge of the topic",
            BulkDifficulty::Difficult => "questions that challenge experienced practitioners",
            BulkDifficulty::Extreme => "expert-level questions on edge cases and deep internals",
        }
    }
}

impl fmt::Display for BulkDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BulkDifficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BulkDifficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownDifficulty {
                value: s.to_string(),
                expected: "easy, moderate, difficult, extreme".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_difficulty() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_parse_bulk_difficulty() {
        assert_eq!(
            "Extreme".parse::<BulkDifficulty>().unwrap(),
            BulkDifficulty::Extreme
        );
        assert!("medium".parse::<BulkDifficulty>().is_err());
    }

    #[test]
    fn test_scales_differ() {
        assert_eq!(Difficulty::SCALE, DifficultyScale::Simple);
        assert_eq!(BulkDifficulty::SCALE, DifficultyScale::Bulk);
        assert_eq!(Difficulty::Easy.label(), BulkDifficulty::Easy.label());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&BulkDifficulty::Difficult).unwrap();
        assert_eq!(json, "\"difficult\"");
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }
}
