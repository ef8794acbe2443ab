//! String utilities for the domain layer.

/// Truncate a string to a maximum length with a trailing marker (UTF-8 safe)
///
/// Uses byte length for `max_len` but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Longest whitespace-delimited token of `text` (first one wins on ties).
pub fn longest_token(text: &str) -> Option<&str> {
    text.split_whitespace()
        .fold(None, |best: Option<&str>, token| match best {
            Some(current) if current.chars().count() >= token.chars().count() => Some(current),
            _ => Some(token),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'の' is 3 bytes; cutting inside it backs up to the previous boundary
        assert_eq!(truncate("あのね", 9), "あのね");
        assert_eq!(truncate("あのねあのね", 7), "あ...");
    }

    #[test]
    fn test_longest_token() {
        assert_eq!(
            longest_token("Summarize the technical details of Payments"),
            Some("Summarize")
        );
        assert_eq!(longest_token("   "), None);
    }

    #[test]
    fn test_longest_token_first_wins_on_tie() {
        assert_eq!(longest_token("alpha gamma delta"), Some("alpha"));
    }
}
