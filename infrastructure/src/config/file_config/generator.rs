//! Generator configuration from TOML (`[generator]` section)

use serde::{Deserialize, Serialize};

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "QUIZFORGE_API_KEY";
/// Fallback environment variable for OpenAI-compatible endpoints
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Raw generator configuration from TOML
///
/// Any OpenAI-compatible chat completions endpoint works.
///
/// ```toml
/// [generator]
/// base_url = "https://api.openai.com/v1"
/// model = "gpt-4o-mini"
/// timeout_seconds = 60
/// temperature = 0.8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Base URL of the API (without `/chat/completions`)
    pub base_url: String,
    /// Model name sent with every request
    pub model: String,
    /// API key; falls back to `QUIZFORGE_API_KEY`, then `OPENAI_API_KEY`
    pub api_key: Option<String>,
    /// HTTP request timeout
    pub timeout_seconds: u64,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            timeout_seconds: 60,
            temperature: 0.8,
        }
    }
}

impl FileGeneratorConfig {
    /// Configured key, else the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_deserialize() {
        let toml_str = r#"
[generator]
base_url = "http://localhost:11434/v1"
model = "llama3"
api_key = "sk-test"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.model, "llama3");
        assert_eq!(config.generator.timeout_seconds, 60);
        assert_eq!(config.generator.resolve_api_key().as_deref(), Some("sk-test"));
    }
}
