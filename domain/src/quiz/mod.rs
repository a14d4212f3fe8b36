//! Quiz domain
//!
//! Difficulty scales, store keys, generation requests and parsing of
//! generated question batches.

pub mod difficulty;
pub mod parsing;
pub mod request;

pub use difficulty::{BulkDifficulty, Difficulty, DifficultyLevel, DifficultyScale};
pub use parsing::{ParsedQuestions, parse_generated_questions, parse_questions_json};
pub use request::{GenerationRequest, QuestionKey};
