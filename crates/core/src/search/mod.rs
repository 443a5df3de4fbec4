//! Incremental multi-criteria search box.
//!
//! Free-text input is tokenized into typed filter criteria with live
//! suggestions; city suggestions arrive asynchronously through a debounced
//! remote lookup. Whenever the selected criteria change, the full updated
//! list is handed back so the orchestration screen can re-derive its query.

mod criteria;
mod parser;
mod states;
mod suggest;

pub use criteria::{Category, Criterion, CriterionSet};
pub use parser::{commit_token, split_input, ParsedInput};
pub use states::{match_state, US_STATES};
pub use suggest::{
    city_options, local_suggestions, CityLookup, SearchBoxEvent, CITY_LOOKUP_DEBOUNCE,
    CITY_SUGGESTION_LIMIT,
};

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::api::AdoptionCatalog;

/// The search box: live term, selected chips, and suggestion state.
///
/// Single-owner UI state. Asynchronous city-suggestion completions are
/// delivered as [`SearchBoxEvent`] values over the channel given at
/// construction and must be fed back through [`SearchBox::apply_event`].
pub struct SearchBox {
    breeds: Vec<String>,
    term: String,
    selected: CriterionSet,
    local: Vec<Criterion>,
    city: Vec<Criterion>,
    lookup: CityLookup,
    events: UnboundedSender<SearchBoxEvent>,
}

impl SearchBox {
    pub fn new(breeds: Vec<String>, events: UnboundedSender<SearchBoxEvent>) -> Self {
        Self {
            breeds,
            term: String::new(),
            selected: CriterionSet::new(),
            local: Vec::new(),
            city: Vec::new(),
            lookup: CityLookup::new(),
            events,
        }
    }

    /// Replace the known breed list (fetched after login).
    pub fn set_breeds(&mut self, breeds: Vec<String>) {
        self.breeds = breeds;
    }

    /// The live, uncommitted term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Currently selected criteria, in selection order.
    pub fn selected(&self) -> &[Criterion] {
        self.selected.items()
    }

    /// Current suggestions: local categories first, then the city slot.
    pub fn suggestions(&self) -> Vec<Criterion> {
        let mut all = self.local.clone();
        all.extend(self.city.iter().cloned());
        all
    }

    /// Process raw input.
    ///
    /// Completed tokens are committed into criteria, the final token becomes
    /// the live term, local suggestions are recomputed, and a debounced city
    /// lookup is scheduled when the term warrants one. Returns the full
    /// updated criterion list when the selection changed.
    pub fn input(
        &mut self,
        raw: &str,
        api: &Arc<dyn AdoptionCatalog>,
    ) -> Option<Vec<Criterion>> {
        let parsed = split_input(raw, &self.breeds);

        let mut changed = false;
        for criterion in parsed.committed {
            changed |= self.selected.select(criterion);
        }

        self.term = parsed.live_term;
        self.refresh_suggestions(api);

        changed.then(|| self.selected.items().to_vec())
    }

    /// Select a suggestion (or any externally built criterion).
    ///
    /// Clears the live term and all suggestions. Returns the full updated
    /// list when the selection changed; a duplicate selection yields nothing.
    pub fn select(&mut self, criterion: Criterion) -> Option<Vec<Criterion>> {
        let changed = self.selected.select(criterion);

        self.term.clear();
        self.local.clear();
        self.city.clear();
        self.lookup.cancel();

        changed.then(|| self.selected.items().to_vec())
    }

    /// Remove the chip matching `(category, value)` exactly.
    pub fn remove(&mut self, criterion: &Criterion) -> Option<Vec<Criterion>> {
        self.selected
            .remove(criterion)
            .then(|| self.selected.items().to_vec())
    }

    /// Clear live text, committed criteria, and suggestions unconditionally.
    pub fn reset(&mut self) {
        self.term.clear();
        self.selected.clear();
        self.local.clear();
        self.city.clear();
        self.lookup.cancel();
    }

    /// Feed back an asynchronous completion.
    ///
    /// A stale generation is dropped; a current one replaces the city slot
    /// only, leaving local suggestions untouched. Returns whether the
    /// suggestion state changed.
    pub fn apply_event(&mut self, event: SearchBoxEvent) -> bool {
        match event {
            SearchBoxEvent::CitySuggestions {
                generation,
                options,
            } => {
                if !self.lookup.is_current(generation) {
                    tracing::debug!(generation, "dropping stale city suggestions");
                    return false;
                }
                self.city = options;
                true
            }
        }
    }

    fn refresh_suggestions(&mut self, api: &Arc<dyn AdoptionCatalog>) {
        if self.term.is_empty() {
            self.local.clear();
            self.city.clear();
            self.lookup.cancel();
            return;
        }

        self.local = local_suggestions(&self.term, &self.breeds);

        let starts_with_digit = self.term.starts_with(|c: char| c.is_ascii_digit());
        if self.term.chars().count() >= 2 && !starts_with_digit {
            self.lookup
                .schedule(self.term.clone(), Arc::clone(api), self.events.clone());
        } else {
            self.lookup.cancel();
        }
    }
}
