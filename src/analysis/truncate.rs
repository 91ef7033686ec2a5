//! Character-budget truncation for prompt inputs

/// Marker appended to any text cut at its budget.
pub const TRUNCATION_MARKER: &str = " ...[truncated]";

/// Cut `text` to at most `max_chars` characters, appending the marker.
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside a
/// code point. Text already within the budget is returned unchanged.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_index, _)) => {
            let mut cut = String::with_capacity(byte_index + TRUNCATION_MARKER.len());
            cut.push_str(&text[..byte_index]);
            cut.push_str(TRUNCATION_MARKER);
            cut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_text_is_cut_at_budget_with_marker() {
        let text = "x".repeat(70_000);
        let cut = truncate(&text, 60_000);
        assert_eq!(cut.chars().count(), 60_000 + TRUNCATION_MARKER.chars().count());
        assert!(cut.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn truncation_is_idempotent_once_within_budget() {
        let text = "abcdef";
        let once = truncate(text, 6);
        assert_eq!(truncate(&once, 6), once);
    }

    #[test]
    fn truncation_is_stable() {
        let text = "The lecture covered acid-base balance in detail.";
        assert_eq!(truncate(text, 20), truncate(text, 20));
    }

    #[test]
    fn multibyte_text_is_cut_between_code_points() {
        let text = "héllo wörld".repeat(10);
        let cut = truncate(&text, 15);
        assert_eq!(cut.chars().count(), 15 + TRUNCATION_MARKER.chars().count());
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(truncate("", 100), "");
        assert_eq!(truncate("", 0), "");
    }
}
