//! Free-text tokenizer for the search box.
//!
//! Comma-separated input is split into committed tokens plus one live term.
//! Committed tokens become criteria through a fixed precedence chain; tokens
//! matching nothing are dropped silently.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::criteria::Criterion;
use super::states::match_state;

pub(super) static ZIP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").unwrap());
pub(super) static AGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}$").unwrap());

/// Result of tokenizing one raw input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Criteria recognized from completed tokens, in input order.
    pub committed: Vec<Criterion>,
    /// The still-being-typed final token.
    pub live_term: String,
}

/// Match a completed token against the recognized patterns.
///
/// Precedence: five digits is a ZIP code, one or two digits an age, then a
/// case-insensitive exact breed match, then a state code. The five-digit
/// rule is checked first so ZIP codes never fall through to the age rule.
pub fn commit_token(token: &str, breeds: &[String]) -> Option<Criterion> {
    if ZIP_PATTERN.is_match(token) {
        return Some(Criterion::ZipCode(token.to_string()));
    }
    if AGE_PATTERN.is_match(token) {
        // One or two digits always fits in u8.
        return Some(Criterion::Age(token.parse().ok()?));
    }
    if breeds.iter().any(|breed| breed.eq_ignore_ascii_case(token)) {
        return Some(Criterion::Breed(token.to_string()));
    }
    if let Some(code) = match_state(token) {
        return Some(Criterion::State(code.to_string()));
    }
    None
}

/// Split raw input into committed criteria and the live term.
///
/// Input without a separator commits nothing: the whole string stays live.
/// With separators, every token but the last is committed; the last token
/// remains live even when the input ends in a comma.
pub fn split_input(input: &str, breeds: &[String]) -> ParsedInput {
    if !input.contains(',') {
        return ParsedInput {
            committed: Vec::new(),
            live_term: input.to_string(),
        };
    }

    let terms: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect();

    let live_term = terms.last().copied().unwrap_or("").to_string();
    let committed = terms
        .iter()
        .take(terms.len().saturating_sub(1))
        .filter_map(|term| commit_token(term, breeds))
        .collect();

    ParsedInput {
        committed,
        live_term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breeds() -> Vec<String> {
        vec!["Pug".to_string(), "Border Collie".to_string()]
    }

    #[test]
    fn test_five_digits_commit_as_zip() {
        assert_eq!(
            commit_token("10001", &breeds()),
            Some(Criterion::ZipCode("10001".to_string()))
        );
        assert_eq!(
            commit_token("00000", &breeds()),
            Some(Criterion::ZipCode("00000".to_string()))
        );
    }

    #[test]
    fn test_one_or_two_digits_commit_as_age() {
        assert_eq!(commit_token("3", &breeds()), Some(Criterion::Age(3)));
        assert_eq!(commit_token("12", &breeds()), Some(Criterion::Age(12)));
        // Three or four digits match nothing.
        assert_eq!(commit_token("123", &breeds()), None);
        assert_eq!(commit_token("1234", &breeds()), None);
    }

    #[test]
    fn test_breed_match_is_case_insensitive_and_keeps_typed_value() {
        assert_eq!(
            commit_token("pug", &breeds()),
            Some(Criterion::Breed("pug".to_string()))
        );
        assert_eq!(
            commit_token("BORDER COLLIE", &breeds()),
            Some(Criterion::Breed("BORDER COLLIE".to_string()))
        );
    }

    #[test]
    fn test_state_match_normalizes_to_uppercase() {
        assert_eq!(
            commit_token("ny", &breeds()),
            Some(Criterion::State("NY".to_string()))
        );
    }

    #[test]
    fn test_unrecognized_token_discarded() {
        assert_eq!(commit_token("floofy", &breeds()), None);
    }

    #[test]
    fn test_no_separator_commits_nothing() {
        let parsed = split_input("pug", &breeds());
        assert!(parsed.committed.is_empty());
        assert_eq!(parsed.live_term, "pug");
    }

    #[test]
    fn test_all_but_last_token_committed() {
        let parsed = split_input("pug, ny, 10001, bor", &breeds());
        assert_eq!(
            parsed.committed,
            vec![
                Criterion::Breed("pug".to_string()),
                Criterion::State("NY".to_string()),
                Criterion::ZipCode("10001".to_string()),
            ]
        );
        assert_eq!(parsed.live_term, "bor");
    }

    #[test]
    fn test_trailing_comma_keeps_final_token_live() {
        let parsed = split_input("pug,", &breeds());
        assert!(parsed.committed.is_empty());
        assert_eq!(parsed.live_term, "pug");
    }

    #[test]
    fn test_unrecognized_committed_tokens_dropped() {
        let parsed = split_input("floofy, 5, x", &breeds());
        assert_eq!(parsed.committed, vec![Criterion::Age(5)]);
        assert_eq!(parsed.live_term, "x");
    }
}
