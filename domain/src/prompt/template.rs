//! Prompt templates for question generation

use crate::quiz::difficulty::DifficultyLevel;
use crate::quiz::request::GenerationRequest;

/// Templates for generating prompts sent to the generative service
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for question generation
    pub fn generation_system() -> &'static str {
        r#"You are an experienced teacher who writes multiple-choice quiz questions.
Every question has exactly four options and exactly one correct answer.
The correct answer must be copied verbatim from the options.
Vary the position of the correct answer between questions.
Avoid "all of the above" and "none of the above" options.
Respond with JSON only."#
    }

    /// User prompt asking for `request.count` questions
    pub fn generation_prompt<D: DifficultyLevel>(request: &GenerationRequest<D>) -> String {
        format!(
            r#"Write {count} multiple-choice questions about the topic "{topic}".

Difficulty: {difficulty} ({guidance}).

Return a JSON object of this exact shape:
{{
  "questions": [
    {{
      "question": "question text",
      "options": ["option 1", "option 2", "option 3", "option 4"],
      "correctAnswer": "one of the options, copied exactly"
    }}
  ]
}}

Return exactly {count} questions and no other text."#,
            count = request.count,
            topic = request.topic,
            difficulty = request.difficulty.label(),
            guidance = request.difficulty.guidance(),
        )
    }
}
