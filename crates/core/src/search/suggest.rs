//! Suggestion generation for the search box.
//!
//! Local suggestions (breed, state, ZIP, age) are recomputed synchronously on
//! every keystroke. City suggestions need a remote lookup and are debounced:
//! a lookup fires after a quiet period, a newer keystroke aborts the pending
//! task, and completions carry a generation number so a stale response can
//! never overwrite a newer one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::{AdoptionCatalog, Location, LocationSearchParams};

use super::criteria::Criterion;
use super::parser::{AGE_PATTERN, ZIP_PATTERN};
use super::states::US_STATES;

/// Quiet period before a city lookup fires.
pub const CITY_LOOKUP_DEBOUNCE: Duration = Duration::from_millis(300);

/// Page size requested from the location search for suggestions.
pub const CITY_SUGGESTION_LIMIT: u32 = 10;

/// Asynchronous output of the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBoxEvent {
    /// A debounced city lookup completed.
    CitySuggestions {
        generation: u64,
        options: Vec<Criterion>,
    },
}

/// Compute the synchronous suggestions for a live term.
///
/// Substring match (case-insensitive) over breeds and states, plus literal
/// ZIP/age suggestions when the term is all digits. Empty terms produce
/// nothing.
pub fn local_suggestions(term: &str, breeds: &[String]) -> Vec<Criterion> {
    if term.is_empty() {
        return Vec::new();
    }

    let term_lower = term.to_lowercase();
    let mut suggestions = Vec::new();

    for breed in breeds {
        if breed.to_lowercase().contains(&term_lower) {
            suggestions.push(Criterion::Breed(breed.clone()));
        }
    }

    for state in US_STATES {
        if state.to_lowercase().contains(&term_lower) {
            suggestions.push(Criterion::State(state.to_string()));
        }
    }

    if ZIP_PATTERN.is_match(term) {
        suggestions.push(Criterion::ZipCode(term.to_string()));
    }

    if AGE_PATTERN.is_match(term) {
        if let Ok(years) = term.parse() {
            suggestions.push(Criterion::Age(years));
        }
    }

    suggestions
}

/// Deduplicate looked-up locations into city suggestions by `(city, state)`.
pub fn city_options(locations: &[Location]) -> Vec<Criterion> {
    let mut options: Vec<Criterion> = Vec::new();
    for location in locations {
        let option = Criterion::City {
            city: location.city.clone(),
            state: location.state.clone(),
        };
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}

/// Debounced, superseding city lookup.
///
/// Only the newest scheduled lookup is current: scheduling (or cancelling)
/// bumps the generation, so an already-sent completion from an older task
/// fails the [`CityLookup::is_current`] check and is dropped by the caller.
#[derive(Debug, Default)]
pub struct CityLookup {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl CityLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort any pending lookup and invalidate completions already in flight.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a completion for `generation` is still the newest lookup.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// The current generation number.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no lookup task is scheduled.
    pub fn is_idle(&self) -> bool {
        self.handle.is_none()
    }

    /// Schedule a lookup for `term` after the debounce interval, superseding
    /// any pending one.
    pub fn schedule(
        &mut self,
        term: String,
        api: Arc<dyn AdoptionCatalog>,
        events: UnboundedSender<SearchBoxEvent>,
    ) {
        self.cancel();
        let generation = self.generation;

        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(CITY_LOOKUP_DEBOUNCE).await;

            let params = LocationSearchParams {
                city: Some(term),
                size: Some(CITY_SUGGESTION_LIMIT),
                ..Default::default()
            };

            match api.search_locations(&params).await {
                Ok(page) => {
                    let options = city_options(&page.results);
                    let _ = events.send(SearchBoxEvent::CitySuggestions {
                        generation,
                        options,
                    });
                }
                Err(e) => warn!(error = %e, "city suggestion lookup failed"),
            }
        }));
    }
}

impl Drop for CityLookup {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breeds() -> Vec<String> {
        vec![
            "Pug".to_string(),
            "Boxer".to_string(),
            "Boston Terrier".to_string(),
        ]
    }

    fn loc(zip: &str, city: &str, state: &str) -> Location {
        Location {
            zip_code: zip.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            city: city.to_string(),
            state: state.to_string(),
            county: String::new(),
        }
    }

    #[test]
    fn test_empty_term_has_no_suggestions() {
        assert!(local_suggestions("", &breeds()).is_empty());
    }

    #[test]
    fn test_substring_matches_breeds_and_states() {
        let suggestions = local_suggestions("bo", &breeds());
        assert!(suggestions.contains(&Criterion::Breed("Boxer".to_string())));
        assert!(suggestions.contains(&Criterion::Breed("Boston Terrier".to_string())));
        assert!(!suggestions.contains(&Criterion::Breed("Pug".to_string())));
    }

    #[test]
    fn test_state_substring_match() {
        let suggestions = local_suggestions("ny", &breeds());
        assert!(suggestions.contains(&Criterion::State("NY".to_string())));
    }

    #[test]
    fn test_five_digit_term_suggests_zip() {
        let suggestions = local_suggestions("10001", &breeds());
        assert_eq!(suggestions, vec![Criterion::ZipCode("10001".to_string())]);
    }

    #[test]
    fn test_short_digit_term_suggests_age() {
        let suggestions = local_suggestions("7", &breeds());
        assert_eq!(suggestions, vec![Criterion::Age(7)]);
    }

    #[test]
    fn test_city_options_dedupe_by_city_state() {
        let locations = vec![
            loc("02108", "Boston", "MA"),
            loc("02109", "Boston", "MA"),
            loc("22713", "Boston", "VA"),
        ];

        let options = city_options(&locations);
        assert_eq!(
            options,
            vec![
                Criterion::City {
                    city: "Boston".to_string(),
                    state: "MA".to_string(),
                },
                Criterion::City {
                    city: "Boston".to_string(),
                    state: "VA".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_cancel_invalidates_in_flight_generation() {
        let mut lookup = CityLookup::new();
        let generation = lookup.generation;
        assert!(lookup.is_current(generation));

        lookup.cancel();
        assert!(!lookup.is_current(generation));
    }
}
