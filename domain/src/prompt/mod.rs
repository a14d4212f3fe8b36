//! Prompt domain
//!
//! Templates for the prompts sent to the question generator.

mod template;

pub use template::PromptTemplate;
