/// escaped, clipped and padded preview of some input text, for log alignment
pub fn formatter_str(c: &str) -> String {
    let s: String = c.chars().take(33).collect::<String>().escape_default().to_string();
    let s = s.replace("\\\"", "\"");
    let s = s.replace("\\\'", "\'");
    let s: String = s.chars().take(33).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}

#[cfg(test)]
mod tests {
    use super::formatter_str;
    use test_log::test;

    #[test]
    fn test_formatter_str() {
        assert_eq!(formatter_str("ab").trim_end(), "|ab|");
        assert_eq!(formatter_str("a\nb").trim_end(), "|a\\nb|");
        assert_eq!(formatter_str("").len(), 35);
        assert_eq!(formatter_str(&"x".repeat(50)).trim_end(), format!("|{}|", "x".repeat(33)));
        // multi-byte input is clipped on char boundaries rather than panicking
        assert!(formatter_str(&"é".repeat(50)).starts_with("|\\u{e9}"));
    }
}
