//! Favorites set and the match workflow.

use tracing::warn;

use crate::api::{AdoptionCatalog, ApiError, Dog};

/// Outcome of a match submission.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Favorites were empty; no network call was made.
    NoFavorites,
    /// The service selected a match. The record is present unless its
    /// lookup returned nothing.
    Matched { match_id: String, dog: Option<Dog> },
}

/// Insertion-ordered set of favorite dog IDs with their cached records.
#[derive(Debug, Default)]
pub struct Favorites {
    ids: Vec<String>,
    records: Vec<Dog>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Cached records from the last successful [`Favorites::fetch_details`].
    pub fn records(&self) -> &[Dog] {
        &self.records
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add if absent, remove if present. Removing also drops the cached
    /// record. Returns whether the ID is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|existing| existing != id);
            self.records.retain(|dog| dog.id != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Empty the set and the cached records.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.records.clear();
    }

    /// Resolve full records for all current favorites.
    ///
    /// An empty set fetches nothing. A remote failure is logged and the
    /// previous records stand.
    pub async fn fetch_details(&mut self, api: &dyn AdoptionCatalog) -> &[Dog] {
        if self.ids.is_empty() {
            return &self.records;
        }

        match api.dogs(&self.ids).await {
            Ok(dogs) => self.records = dogs,
            Err(e) => warn!(error = %e, "failed to fetch favorite records"),
        }

        &self.records
    }

    /// Submit the favorites for matching.
    ///
    /// An empty set is a no-op without a network call. On success the
    /// matched dog's record is resolved, favorites and cached records are
    /// cleared, and the match is returned for the caller to surface.
    pub async fn submit_match(
        &mut self,
        api: &dyn AdoptionCatalog,
    ) -> Result<MatchOutcome, ApiError> {
        if self.ids.is_empty() {
            return Ok(MatchOutcome::NoFavorites);
        }

        let match_id = api.match_dog(&self.ids).await?;
        let dog = api
            .dogs(&[match_id.clone()])
            .await?
            .into_iter()
            .next();

        self.clear();

        Ok(MatchOutcome::Matched { match_id, dog })
    }
}
