//! Console output formatter for quiz responses

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use quizforge_application::McqResponse;
use quizforge_domain::{OutputFormat, Question};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Formats quiz responses for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a response in the given format
    pub fn render(format: OutputFormat, response: &McqResponse) -> String {
        match format {
            OutputFormat::Full => Self::format(response),
            OutputFormat::Quiz => Self::format_quiz(response),
            OutputFormat::Json => Self::format_json(response),
        }
    }

    /// Questions followed by the answer key
    pub fn format(response: &McqResponse) -> String {
        if let McqResponse::Error { error } = response {
            return Self::error_line(error);
        }

        let mut output = Self::format_quiz(response);
        let questions = response.questions();
        if questions.is_empty() {
            return output;
        }

        output.push_str(&Self::section_header("Answer Key"));
        for (i, question) in questions.iter().enumerate() {
            let label = Self::label(question.correct_index());
            output.push_str(&format!(
                "  {:>2}. {} {}\n",
                i + 1,
                format!("{})", label).green().bold(),
                question.correct_answer()
            ));
        }
        output.push_str(&Self::footer());

        output
    }

    /// Questions only, answers hidden
    pub fn format_quiz(response: &McqResponse) -> String {
        if let McqResponse::Error { error } = response {
            return Self::error_line(error);
        }

        let questions = response.questions();
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Quiz ({} questions)", questions.len())));
        output.push('\n');

        if let Some(warning) = response.warning() {
            output.push_str(&format!("{} {}\n", "Warning:".yellow().bold(), warning));
        }

        if questions.is_empty() {
            output.push_str(&format!("\n{}\n", "No questions.".dimmed()));
            return output;
        }

        for (i, question) in questions.iter().enumerate() {
            output.push('\n');
            output.push_str(&Self::question_block(i + 1, question));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(response: &McqResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    fn question_block(number: usize, question: &Question) -> String {
        let mut block = format!(
            "{} {}\n",
            format!("{}.", number).cyan().bold(),
            question.question()
        );
        for (i, option) in question.options().iter().enumerate() {
            block.push_str(&format!("   {}) {}\n", Self::label(i), option));
        }
        block
    }

    fn label(index: usize) -> char {
        OPTION_LABELS.get(index).copied().unwrap_or('?')
    }

    fn error_line(error: &str) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, response: &McqResponse) -> String {
        Self::format(response)
    }

    fn format_quiz(&self, response: &McqResponse) -> String {
        Self::format_quiz(response)
    }

    fn format_json(&self, response: &McqResponse) -> String {
        Self::format_json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> McqResponse {
        McqResponse::Questions {
            questions: vec![
                Question::new(
                    "Largest planet?",
                    vec![
                        "Mars".into(),
                        "Jupiter".into(),
                        "Venus".into(),
                        "Earth".into(),
                    ],
                    "Jupiter",
                )
                .unwrap(),
            ],
            warning: None,
        }
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_full_includes_answer_key() {
        plain();
        let output = ConsoleFormatter::format(&response());
        assert!(output.contains("1. Largest planet?"));
        assert!(output.contains("B) Jupiter"));
        assert!(output.contains("Answer Key"));
    }

    #[test]
    fn test_quiz_hides_answers() {
        plain();
        let output = ConsoleFormatter::format_quiz(&response());
        assert!(output.contains("D) Earth"));
        assert!(!output.contains("Answer Key"));
    }

    #[test]
    fn test_warning_is_shown() {
        plain();
        let response = McqResponse::Questions {
            questions: response().questions().to_vec(),
            warning: Some("Only 1 of 3 questions could be supplied".into()),
        };
        let output = ConsoleFormatter::format_quiz(&response);
        assert!(output.contains("Warning: Only 1 of 3"));

        let full = ConsoleFormatter::render(OutputFormat::Full, &response);
        assert_eq!(full.matches("Only 1 of 3").count(), 1);
    }

    #[test]
    fn test_error_renders_message() {
        plain();
        let response = McqResponse::error("Could not generate questions for this topic, try again.");
        assert_eq!(
            ConsoleFormatter::render(OutputFormat::Full, &response),
            "Error: Could not generate questions for this topic, try again."
        );
    }

    #[test]
    fn test_json_shape() {
        let json = ConsoleFormatter::format_json(&response());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["questions"][0]["correctAnswer"], "Jupiter");
        assert!(value.get("warning").is_none());

        let error = ConsoleFormatter::format_json(&McqResponse::error("nope"));
        let value: serde_json::Value = serde_json::from_str(&error).unwrap();
        assert_eq!(value["error"], "nope");
    }
}
