// Output formatting: terminal display of cleanup candidates and results.

pub mod terminal;

/// Shorten a keyword to `max_chars` characters for a fixed-width column.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("running shoes", 20), "running shoes");
        assert_eq!(truncate_chars("running shoes", 7), "running...");
        assert_eq!(truncate_chars("跑步鞋男款", 3), "跑步鞋...");
    }
}
