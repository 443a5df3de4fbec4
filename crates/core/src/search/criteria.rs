//! Typed filter criteria contributed by the search box.

use std::fmt;

/// The closed set of filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Breed,
    State,
    ZipCode,
    Age,
    City,
}

/// One typed filter condition.
///
/// Equality is `(category, value)` equality, which is what chip
/// deduplication and removal key on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Breed name, kept as the user typed or selected it.
    Breed(String),
    /// Two-letter state code, uppercased.
    State(String),
    /// Five-digit ZIP code.
    ZipCode(String),
    /// Age in years.
    Age(u8),
    /// A resolved city together with its state.
    City { city: String, state: String },
}

impl Criterion {
    pub fn category(&self) -> Category {
        match self {
            Criterion::Breed(_) => Category::Breed,
            Criterion::State(_) => Category::State,
            Criterion::ZipCode(_) => Category::ZipCode,
            Criterion::Age(_) => Category::Age,
            Criterion::City { .. } => Category::City,
        }
    }

    /// Display label for chips and suggestion rows.
    pub fn label(&self) -> String {
        match self {
            Criterion::Breed(breed) => breed.clone(),
            Criterion::State(code) => code.clone(),
            Criterion::ZipCode(zip) => format!("ZIP: {zip}"),
            Criterion::Age(years) => format!("Age: {years} years"),
            Criterion::City { city, state } => format!("{city}, {state}"),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The ordered set of selected criteria (the "chips").
///
/// Breed, state and ZIP criteria may coexist in any number but are
/// deduplicated by `(category, value)`. Age and city are singletons: a new
/// selection replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct CriterionSet {
    items: Vec<Criterion>,
}

impl CriterionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Criterion] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add a criterion, returning whether the set changed.
    ///
    /// Identical `(category, value)` selections are no-ops. Age and city
    /// selections with a different value replace the existing chip.
    pub fn select(&mut self, criterion: Criterion) -> bool {
        if self.items.contains(&criterion) {
            return false;
        }

        match criterion.category() {
            Category::Age | Category::City => {
                self.items
                    .retain(|existing| existing.category() != criterion.category());
                self.items.push(criterion);
                true
            }
            _ => {
                self.items.push(criterion);
                true
            }
        }
    }

    /// Remove the criterion matching `(category, value)` exactly, returning
    /// whether anything was removed.
    pub fn remove(&mut self, criterion: &Criterion) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing != criterion);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
