//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generator;
mod output;
mod store;
mod supply;

pub use generator::{API_KEY_ENV, FileGeneratorConfig, OPENAI_API_KEY_ENV};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use store::{FileStoreConfig, StoreBackend};
pub use supply::FileSupplyConfig;

use quizforge_application::SupplyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("[supply] {0}")]
    InvalidPolicy(String),

    #[error("[supply] max_count cannot be 0")]
    ZeroMaxCount,

    #[error("{section} timeout_seconds cannot be 0")]
    ZeroTimeout { section: &'static str },

    #[error("[generator] {field} cannot be empty")]
    EmptyGeneratorField { field: &'static str },

    #[error("[generator] temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Reuse policy and request limits
    pub supply: FileSupplyConfig,
    /// Generative service settings
    pub generator: FileGeneratorConfig,
    /// Question store settings
    pub store: FileStoreConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Err(e) = self.supply.to_policy() {
            issues.push(ConfigValidationError::InvalidPolicy(e.to_string()));
        }
        if self.supply.max_count == 0 {
            issues.push(ConfigValidationError::ZeroMaxCount);
        }
        if let Some(0) = self.supply.timeout_seconds {
            issues.push(ConfigValidationError::ZeroTimeout { section: "[supply]" });
        }

        if self.generator.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyGeneratorField { field: "base_url" });
        }
        if self.generator.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyGeneratorField { field: "model" });
        }
        if self.generator.timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroTimeout {
                section: "[generator]",
            });
        }
        if !(0.0..=2.0).contains(&self.generator.temperature) {
            issues.push(ConfigValidationError::InvalidTemperature(
                self.generator.temperature,
            ));
        }

        issues
    }

    /// Build the application supply configuration
    pub fn to_supply_config(&self) -> Result<SupplyConfig, ConfigValidationError> {
        let policy = self
            .supply
            .to_policy()
            .map_err(|e| ConfigValidationError::InvalidPolicy(e.to_string()))?;
        Ok(SupplyConfig::default()
            .with_policy(policy)
            .with_max_count(self.supply.max_count)
            .with_timeout_seconds(self.supply.timeout_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_domain::OutputFormat;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[supply]
mature_threshold = 100
mature_ratio = 0.8
initial_ratio = 0.2
max_count = 30
timeout_seconds = 90

[generator]
base_url = "http://localhost:8080/v1"
model = "mistral"
temperature = 0.5

[store]
backend = "jsonl"
path = "/var/lib/quizforge/questions.jsonl"

[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.supply.mature_threshold, 100);
        assert_eq!(config.generator.model, "mistral");
        assert_eq!(config.store.backend, StoreBackend::Jsonl);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.validate().is_empty());

        let supply = config.to_supply_config().unwrap();
        assert_eq!(supply.policy.mature_threshold(), 100);
        assert_eq!(supply.max_count, 30);
        assert_eq!(supply.timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.supply.mature_threshold, 200);
        assert_eq!(config.store.backend, StoreBackend::Jsonl);
        assert!(config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[supply]
mature_ratio = 1.5
max_count = 0
timeout_seconds = 0

[generator]
model = ""
temperature = 3.0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 5);
        assert!(issues.contains(&ConfigValidationError::ZeroMaxCount));
        assert!(issues.contains(&ConfigValidationError::EmptyGeneratorField { field: "model" }));
        assert!(config.to_supply_config().is_err());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ConfigValidationError::ZeroTimeout { section: "[generator]" }.to_string(),
            "[generator] timeout_seconds cannot be 0"
        );
    }
}
