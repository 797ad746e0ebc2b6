//! Eligibility policy for sending a string leaf to a translation backend.
//!
//! Values that look like interpolation placeholders, URLs, date-format
//! patterns or currency codes must pass through a merge byte-for-byte.

/// Currency codes that stay verbatim in every language.
const CURRENCY_CODES: [&str; 5] = ["USD", "CNY", "JPY", "KRW", "EUR"];

/// Date-format tokens matched as substrings of the upper-cased value.
/// Substring matching is coarse and inherited as-is: an ordinary word that
/// upper-cases into a `MM`/`DD` hit (e.g. "Command") is also skipped.
const DATE_TOKENS: [&str; 4] = ["MMM", "DD", "YYYY", "MM"];

/// Decide whether a string leaf must be left untouched during translation.
/// Rules are evaluated in order; first match wins.
///
/// Blank strings are *not* skipped: the merge passes them through without a
/// backend call, but that is an optimization on its side, not a policy rule.
pub fn should_skip(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    // Template / interpolation placeholders.
    if value.starts_with('{') || value.starts_with('$') || value.contains("{{") {
        return true;
    }
    // URLs.
    if value.starts_with("http://") || value.starts_with("https://") {
        return true;
    }
    // Date-format patterns like "MMM DD, YYYY".
    let upper = value.to_uppercase();
    if DATE_TOKENS.iter().any(|tok| upper.contains(tok)) {
        return true;
    }
    CURRENCY_CODES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_not_skipped() {
        assert!(!should_skip(""));
        assert!(!should_skip("   "));
        assert!(!should_skip("\t\n"));
    }

    #[test]
    fn placeholders_are_skipped() {
        assert!(should_skip("{count} items"));
        assert!(should_skip("$t(common.save)"));
        assert!(should_skip("Hello {{name}}"));
        assert!(!should_skip("Save changes"));
    }

    #[test]
    fn urls_are_skipped() {
        assert!(should_skip("https://example.com/docs"));
        assert!(should_skip("http://example.com"));
        assert!(!should_skip("Visit our website"));
    }

    #[test]
    fn date_patterns_are_skipped() {
        assert!(should_skip("MMM DD, YYYY"));
        assert!(should_skip("YYYY-MM-DD"));
        // Inherited false positive: "command" contains "mm".
        assert!(should_skip("Run the command"));
    }

    #[test]
    fn currency_codes_are_skipped_only_on_exact_match() {
        assert!(should_skip("USD"));
        assert!(should_skip("EUR"));
        assert!(!should_skip("usd"));
        assert!(!should_skip("US Dollar"));
    }
}
