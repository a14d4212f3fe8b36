//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for supplied quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered questions with lettered options and an answer key (default)
    #[default]
    Full,
    /// Questions only, answers hidden
    Quiz,
    /// JSON response body
    Json,
}
