//! US state codes recognized by the search box and the geographic panel.

/// Two-letter codes for the 50 states plus DC.
pub const US_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Case-insensitive lookup, returning the canonical uppercase code.
pub fn match_state(token: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|state| state.eq_ignore_ascii_case(token))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_state_case_insensitive() {
        assert_eq!(match_state("ny"), Some("NY"));
        assert_eq!(match_state("Ca"), Some("CA"));
        assert_eq!(match_state("XX"), None);
    }

    #[test]
    fn test_state_list_is_unique() {
        let mut codes: Vec<_> = US_STATES.to_vec();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), US_STATES.len());
    }
}
