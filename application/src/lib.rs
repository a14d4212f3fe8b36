//! Application layer for quizforge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SupplyConfig;
pub use ports::{
    progress::{NoSupplyProgress, SupplyProgressNotifier},
    question_generator::{GenerationError, QuestionGenerator},
    question_store::{QuestionStore, StoreError},
};
pub use use_cases::generate_mcq::{
    GENERATION_FAILED_MESSAGE, GenerateMcqAction, McqInput, McqResponse,
    STORE_UNAVAILABLE_MESSAGE, TIMEOUT_MESSAGE,
};
pub use use_cases::supply_questions::{SupplyError, SupplyQuestionsUseCase};
