//! Store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which question store adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local; forgotten on exit
    Memory,
    /// Append-only JSON Lines file
    #[default]
    Jsonl,
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Path of the JSONL file; defaults to the platform data directory
    pub path: Option<String>,
}

impl FileStoreConfig {
    /// Path of the JSONL store file
    ///
    /// `$XDG_DATA_HOME/quizforge/questions.jsonl` unless configured.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(p) => Some(PathBuf::from(p)),
            None => dirs::data_dir().map(|d| d.join("quizforge").join("questions.jsonl")),
        }
    }
}
