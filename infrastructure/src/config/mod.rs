//! Configuration file loading for quizforge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZFORGE_` environment variables (`QUIZFORGE_GENERATOR__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizforge.toml` or `./.quizforge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quizforge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV, ConfigValidationError, FileConfig, FileGeneratorConfig, FileOutputConfig,
    FileOutputFormat, FileStoreConfig, FileSupplyConfig, OPENAI_API_KEY_ENV, StoreBackend,
};
pub use loader::ConfigLoader;
