/// Splits the input text on runs of Unicode whitespace.
///
/// Any string is valid input; empty or whitespace-only text yields no
/// tokens. Tokens keep their case and punctuation, so `"The"` and `"the,"`
/// are distinct words downstream.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_only_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n  ").is_empty());
    }

    #[test]
    fn splits_on_unicode_whitespace() {
        // U+00A0 (no-break space) and U+2028 (line separator) both carry
        // the White_Space property.
        let tokens = tokenize("h\u{00E9}llo\u{00A0}w\u{00F6}rld\u{2028}again");
        assert_eq!(tokens, vec!["héllo", "wörld", "again"]);
    }

    #[test]
    fn keeps_order_case_and_punctuation() {
        let tokens = tokenize("The the, the.");
        assert_eq!(tokens, vec!["The", "the,", "the."]);
    }
}
