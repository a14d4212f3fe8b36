//! String utilities for the domain layer.

/// Shorten question text for log lines (UTF-8 safe)
///
/// `max_len` is a byte budget; the cut is moved back to the nearest
/// character boundary and an ellipsis appended.
pub fn preview(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_ascii() {
        assert_eq!(preview("What is Rust?", 20), "What is Rust?");
        assert_eq!(preview("What is ownership?", 10), "What is...");
    }

    #[test]
    fn test_preview_multibyte() {
        // 'é' is 2 bytes; a cut at byte 4 would split the second one
        assert_eq!(preview("éééé", 7), "éé...");
    }
}
