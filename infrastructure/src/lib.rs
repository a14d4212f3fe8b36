//! Infrastructure layer for quizforge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generator;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeneratorConfig, FileOutputConfig,
    FileStoreConfig, FileSupplyConfig, StoreBackend,
};
pub use generator::HttpQuestionGenerator;
pub use store::{InMemoryQuestionStore, JsonlQuestionStore};
