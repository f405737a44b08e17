use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `s` to at most `max_width` display columns, ending in `...`
/// when anything was cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// `75` -> `"1m 15s"`, `9` -> `"9s"`.
pub fn format_seconds(seconds: u32) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else {
        format!("{}m {:02}s", seconds / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        let s = "Short string";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        let s = "Exactly twenty chars";
        assert_eq!(truncate_string(s, 20), s);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let s = "Which planet is known as the Red Planet? 🔴🔴🔴";
        let result = truncate_string(s, 12);
        assert_eq!(result, "Which pla...");
        assert_eq!(truncate_string("🔬🔬🔬🔬", 7), "🔬🔬...");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0s");
        assert_eq!(format_seconds(59), "59s");
        assert_eq!(format_seconds(60), "1m 00s");
        assert_eq!(format_seconds(75), "1m 15s");
    }
}
