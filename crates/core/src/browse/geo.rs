//! Geographic filter panel: state multi-select feeding the ZIP filter.

use tracing::warn;

use crate::api::{AdoptionCatalog, LocationSearchParams};

use super::filters::LOCATION_PAGE_SIZE;

/// State multi-select whose resolved ZIP codes become the geographic filter.
///
/// Every selection change resolves the complete ZIP set for the selection;
/// the emission replaces any previous geographic filter rather than merging
/// with it.
#[derive(Debug, Default)]
pub struct GeoPanel {
    selected: Vec<String>,
}

impl GeoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Replace the state selection and resolve its ZIP codes.
    ///
    /// An empty selection emits an empty ZIP list without a remote call.
    /// A failed lookup is logged and emits nothing, leaving the previous
    /// filter standing.
    pub async fn set_states(
        &mut self,
        api: &dyn AdoptionCatalog,
        states: Vec<String>,
    ) -> Option<Vec<String>> {
        self.selected = states;

        if self.selected.is_empty() {
            return Some(Vec::new());
        }

        let params = LocationSearchParams {
            states: Some(self.selected.clone()),
            size: Some(LOCATION_PAGE_SIZE),
            ..Default::default()
        };

        match api.search_locations(&params).await {
            Ok(page) => Some(page.results.into_iter().map(|loc| loc.zip_code).collect()),
            Err(e) => {
                warn!(error = %e, "state location search failed");
                None
            }
        }
    }

    /// Clear the selection, emitting an empty ZIP list.
    pub fn reset(&mut self) -> Vec<String> {
        self.selected.clear();
        Vec::new()
    }
}
