//! Domain layer for quizforge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question supply
//!
//! A quiz request names a topic, a difficulty and a question count. Part of
//! the request is served from questions generated earlier, the rest is
//! generated fresh. How large the reused part may be depends on how mature
//! the stored partition for that (topic, difficulty) is:
//!
//! - **Empty**: nothing stored, everything is generated
//! - **Initial**: a thin store, mostly fresh generation
//! - **Mature**: a well-stocked store, mostly reuse

pub mod config;
pub mod core;
pub mod prompt;
pub mod quiz;
pub mod supply;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    question::{OPTION_COUNT, Question, RawQuestion},
    topic::Topic,
};
pub use prompt::PromptTemplate;
pub use quiz::{
    BulkDifficulty, Difficulty, DifficultyLevel, DifficultyScale, GenerationRequest,
    ParsedQuestions, QuestionKey, parse_generated_questions, parse_questions_json,
};
pub use supply::{MaturityTier, Provenance, ReusePolicy, SupplyOutcome};
