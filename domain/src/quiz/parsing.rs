//! Parsing generated questions from model output.
//!
//! Models answer with either a raw JSON document or a fenced ` ```json `
//! block. Accepted shapes are `{"questions": [...]}` and a bare array.
//! Every item passes through [`Question`] validation; items that fail are
//! counted in [`ParsedQuestions::rejected`] instead of aborting the batch.

use crate::core::question::Question;

/// Result of parsing a model response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuestions {
    pub questions: Vec<Question>,
    /// Items that were present but failed validation, with the reason
    pub rejected: Vec<String>,
}

/// Parse questions from model response text.
///
/// Returns `None` when no JSON payload with a question list is found at all.
pub fn parse_generated_questions(response: &str) -> Option<ParsedQuestions> {
    let mut in_block = false;
    let mut current_block = String::new();

    for line in response.lines() {
        let trimmed = line.trim();
        if !in_block && (trimmed == "```json" || trimmed == "```") {
            in_block = true;
            current_block.clear();
        } else if in_block && trimmed == "```" {
            in_block = false;
            if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&current_block)
                && let Some(result) = parse_questions_json(&parsed)
            {
                return Some(result);
            }
        } else if in_block {
            current_block.push_str(line);
            current_block.push('\n');
        }
    }

    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(response.trim()) {
        return parse_questions_json(&parsed);
    }

    // Some models wrap the JSON in prose; try the outermost object
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<serde_json::Value>(&response[start..=end])
        .ok()
        .and_then(|v| parse_questions_json(&v))
}

/// Parse questions from a JSON value.
///
/// Expected schema:
/// ```json
/// {
///   "questions": [
///     { "question": "string", "options": ["a", "b", "c", "d"], "correctAnswer": "a" }
///   ]
/// }
/// ```
pub fn parse_questions_json(json: &serde_json::Value) -> Option<ParsedQuestions> {
    let items = match json {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(map) => map.get("questions")?.as_array()?,
        _ => return None,
    };

    let mut parsed = ParsedQuestions::default();
    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value::<Question>(item.clone()) {
            Ok(q) => parsed.questions.push(q),
            Err(e) => parsed.rejected.push(format!("item {}: {}", index, e)),
        }
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"question":"Capital of France?","options":["Paris","Rome","Berlin","Madrid"],"correctAnswer":"Paris"}"#;

    #[test]
    fn test_parse_raw_object() {
        let text = format!(r#"{{"questions":[{}]}}"#, VALID);
        let parsed = parse_generated_questions(&text).unwrap();
        assert_eq!(parsed.questions.len(), 1);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_fenced_block() {
        let text = format!(
            "Here you go:\n```json\n{{\"questions\": [{}]}}\n```\nEnjoy!",
            VALID
        );
        let parsed = parse_generated_questions(&text).unwrap();
        assert_eq!(parsed.questions[0].correct_answer(), "Paris");
    }

    #[test]
    fn test_parse_bare_array() {
        let text = format!("[{}, {}]", VALID, VALID);
        let parsed = parse_generated_questions(&text).unwrap();
        assert_eq!(parsed.questions.len(), 2);
    }

    #[test]
    fn test_malformed_items_are_rejected_not_fatal() {
        let bad = r#"{"question":"Q?","options":["a","b","c"],"correctAnswer":"a"}"#;
        let text = format!(r#"{{"questions":[{}, {}]}}"#, VALID, bad);
        let parsed = parse_generated_questions(&text).unwrap();
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.rejected.len(), 1);
        assert!(parsed.rejected[0].starts_with("item 1:"));
    }

    #[test]
    fn test_json_embedded_in_prose() {
        let text = format!(r#"Sure! {{"questions":[{}]}} Good luck."#, VALID);
        assert_eq!(parse_generated_questions(&text).unwrap().questions.len(), 1);
    }

    #[test]
    fn test_no_payload() {
        assert!(parse_generated_questions("I cannot help with that.").is_none());
        assert!(parse_generated_questions(r#"{"answer": 42}"#).is_none());
    }
}
