//! Output formatter trait

use quizforge_application::McqResponse;

/// Trait for formatting quiz responses
pub trait OutputFormatter {
    /// Questions followed by the answer key
    fn format(&self, response: &McqResponse) -> String;

    /// Questions only
    fn format_quiz(&self, response: &McqResponse) -> String;

    /// Format as JSON
    fn format_json(&self, response: &McqResponse) -> String;
}
