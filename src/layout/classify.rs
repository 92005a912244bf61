//! Layout role classification.
//!
//! A fragment's role is a pure function of its text. The rules are
//! order-dependent, so they live in an explicit ordered chain rather than a
//! set of independent conditions: the first predicate that matches decides
//! the role, and anything unmatched is body text.

use crate::model::{ClassifiedFragment, Role, TextFragment};

/// Texts at or above this many chars are never headers.
const HEADER_MAX_CHARS: usize = 50;

/// Texts at or above this many chars are never footers.
const FOOTER_MAX_CHARS: usize = 30;

/// The rule chain, evaluated top to bottom, first match wins.
///
/// Order matters: a short all-digit string satisfies both predicates (digits
/// have no lowercase form), and it is the header rule's position, not any
/// notion of specificity, that decides it.
const RULES: &[(fn(&str) -> bool, Role)] = &[
    (looks_like_header, Role::Header),
    (looks_like_page_number, Role::Footer),
];

/// Assign a role to a fragment text.
///
/// Total over any non-empty trimmed string; whitespace-only text is
/// filtered out at extraction and never reaches this function.
pub fn classify(text: &str) -> Role {
    RULES
        .iter()
        .find(|(applies, _)| applies(text))
        .map(|&(_, role)| role)
        .unwrap_or(Role::Body)
}

/// Classify every fragment of a page, preserving order and count.
pub fn classify_page(fragments: Vec<TextFragment>) -> Vec<ClassifiedFragment> {
    fragments
        .into_iter()
        .map(|fragment| {
            let role = classify(&fragment.text);
            ClassifiedFragment::new(fragment, role)
        })
        .collect()
}

/// Short text whose alphabetic characters are all uppercase.
///
/// A string with no alphabetic characters at all passes vacuously, so short
/// symbol or digit strings satisfy this test. Deliberate; see the crate-level
/// behavioral notes.
fn looks_like_header(text: &str) -> bool {
    text.chars().count() < HEADER_MAX_CHARS
        && text
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// Short non-empty text consisting entirely of ASCII decimal digits.
fn looks_like_page_number(text: &str) -> bool {
    !text.is_empty()
        && text.chars().count() < FOOTER_MAX_CHARS
        && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_uppercase_is_header() {
        assert_eq!(classify("CHAPTER ONE"), Role::Header);
        assert_eq!(classify("SUMMARY"), Role::Header);
    }

    #[test]
    fn test_lowercase_is_body() {
        assert_eq!(classify("Chapter one"), Role::Body);
        assert_eq!(classify("a"), Role::Body);
    }

    #[test]
    fn test_no_alphabetic_chars_counts_as_uppercase() {
        // The header predicate is vacuously true without letters, and the
        // header rule fires before the footer rule gets a look.
        assert_eq!(classify("123-456"), Role::Header);
        assert_eq!(classify("!!!"), Role::Header);
    }

    #[test]
    fn test_all_digits_matches_header_rule_first() {
        // Rule order wins, not specificity: digits also satisfy the
        // vacuous-uppercase header check.
        assert_eq!(classify("42"), Role::Header);
    }

    #[test]
    fn test_digit_strings_satisfy_both_predicates() {
        // Both predicates match a short digit string; classify() resolves
        // the overlap purely by rule position.
        assert!(looks_like_header("9"));
        assert!(looks_like_page_number("9"));
        assert_eq!(classify("9"), Role::Header);
    }

    #[test]
    fn test_header_length_boundary() {
        let exactly_50 = "A".repeat(50);
        assert_eq!(classify(&exactly_50), Role::Body);

        let at_49 = "A".repeat(49);
        assert_eq!(classify(&at_49), Role::Header);
    }

    #[test]
    fn test_footer_length_boundary() {
        assert!(looks_like_page_number(&"7".repeat(29)));
        assert!(!looks_like_page_number(&"7".repeat(30)));
        assert!(!looks_like_page_number(""));
        assert!(!looks_like_page_number("12a"));
    }

    #[test]
    fn test_length_is_measured_in_chars_not_bytes() {
        // 49 two-byte uppercase letters: under the threshold by chars.
        let text = "É".repeat(49);
        assert_eq!(classify(&text), Role::Header);
    }

    #[test]
    fn test_mixed_case_long_text_is_body() {
        assert_eq!(
            classify("This paragraph is ordinary body text that runs well past fifty characters."),
            Role::Body
        );
    }

    #[test]
    fn test_classify_page_preserves_count_and_order() {
        let fragments = vec![
            TextFragment::new("TITLE", 0.0, 700.0, 50.0, 14.0),
            TextFragment::new("Some body text", 0.0, 650.0, 120.0, 12.0),
            TextFragment::new("Another body line", 0.0, 630.0, 120.0, 12.0),
        ];
        let classified = classify_page(fragments);
        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0].role, Role::Header);
        assert_eq!(classified[1].role, Role::Body);
        assert_eq!(classified[1].text(), "Some body text");
    }
}
