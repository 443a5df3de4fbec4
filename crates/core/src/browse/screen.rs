//! Search orchestration: filter merging, query derivation, refetch.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::api::{AdoptionCatalog, ApiError, Dog, DogSearchParams, LocationSearchParams};
use crate::pagination::{page_window, PageItem};
use crate::search::Criterion;

use super::filters::{derive_query, total_pages, CombinedFilters, LOCATION_PAGE_SIZE};

/// A fetched result page ready to apply to the screen.
#[derive(Debug, Clone)]
pub struct ResultPage {
    pub dogs: Vec<Dog>,
    pub total: u32,
}

/// Handle for one derived fetch.
///
/// The sequence number makes refreshes last-request-wins: a completion whose
/// ticket is no longer the newest is discarded.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: DogSearchParams,
}

/// The search screen: combined filter state plus the current result page.
#[derive(Debug, Default)]
pub struct SearchScreen {
    filters: CombinedFilters,
    dogs: Vec<Dog>,
    total: u32,
    total_pages: u32,
    fetch_seq: u64,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self {
            total_pages: 1,
            ..Default::default()
        }
    }

    pub fn filters(&self) -> &CombinedFilters {
        &self.filters
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Page bar entries for the current position.
    pub fn page_items(&self) -> Vec<PageItem> {
        page_window(self.filters.page, self.total_pages)
    }

    /// Merge a full criterion list from the search box into the filter state.
    ///
    /// Breed criteria replace the selected-breed list outright. The ZIP
    /// filter is rebuilt from the geographic criteria: a city criterion
    /// resolves to its ZIP codes which replace the filter; state criteria
    /// resolve to ZIPs unioned with explicit ZIP criteria (running after the
    /// city branch, so the union wins when both are present); explicit ZIPs
    /// alone set the filter directly. Resolution failures keep the previous
    /// ZIP filter. Resets the page to 1.
    pub async fn apply_criteria(&mut self, api: &dyn AdoptionCatalog, criteria: &[Criterion]) {
        self.filters.page = 1;

        self.filters.breeds = criteria
            .iter()
            .filter_map(|c| match c {
                Criterion::Breed(breed) => Some(breed.clone()),
                _ => None,
            })
            .collect();

        let explicit_zips: Vec<String> = criteria
            .iter()
            .filter_map(|c| match c {
                Criterion::ZipCode(zip) => Some(zip.clone()),
                _ => None,
            })
            .collect();

        let states: Vec<String> = criteria
            .iter()
            .filter_map(|c| match c {
                Criterion::State(code) => Some(code.clone()),
                _ => None,
            })
            .collect();

        let city = criteria.iter().find_map(|c| match c {
            Criterion::City { city, state } => Some((city.clone(), state.clone())),
            _ => None,
        });

        if let Some((city_name, state)) = &city {
            let params = LocationSearchParams {
                city: Some(city_name.clone()),
                states: Some(vec![state.clone()]),
                size: Some(LOCATION_PAGE_SIZE),
                ..Default::default()
            };
            match api.search_locations(&params).await {
                Ok(page) => {
                    self.filters.zip_codes =
                        page.results.into_iter().map(|loc| loc.zip_code).collect();
                }
                Err(e) => warn!(error = %e, city = %city_name, "city ZIP resolution failed"),
            }
        }

        if !states.is_empty() {
            let params = LocationSearchParams {
                states: Some(states.clone()),
                size: Some(LOCATION_PAGE_SIZE),
                ..Default::default()
            };
            match api.search_locations(&params).await {
                Ok(page) => {
                    let state_zips = page.results.into_iter().map(|loc| loc.zip_code);
                    self.filters.zip_codes = dedupe(explicit_zips.into_iter().chain(state_zips));
                }
                Err(e) => warn!(error = %e, "state ZIP resolution failed"),
            }
        } else if city.is_none() {
            self.filters.zip_codes = explicit_zips;
        }

        self.filters.age = criteria.iter().find_map(|c| match c {
            Criterion::Age(years) => Some(*years),
            _ => None,
        });
    }

    /// Replace the ZIP filter with a geographic-panel emission.
    pub fn set_geo_zip_codes(&mut self, zip_codes: Vec<String>) {
        self.filters.zip_codes = zip_codes;
        self.filters.page = 1;
    }

    /// Flip the breed sort order.
    pub fn toggle_sort(&mut self) {
        self.filters.sort = self.filters.sort.toggled();
        self.filters.page = 1;
    }

    /// Navigate to a page. Page 0 and pages past the end are rejected.
    /// Navigation does not touch any other filter field.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page == 0 || page > self.total_pages {
            return false;
        }
        self.filters.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.filters.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        if self.filters.page == 1 {
            return false;
        }
        self.go_to_page(self.filters.page - 1)
    }

    /// Clear every filter back to defaults.
    pub fn reset(&mut self) {
        self.filters = CombinedFilters::default();
    }

    /// Derive a query for the current filters and claim a fetch ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        FetchTicket {
            seq: self.fetch_seq,
            params: derive_query(&self.filters),
        }
    }

    /// Apply a completed fetch, unless a newer fetch has since begun.
    pub fn complete_fetch(&mut self, seq: u64, page: ResultPage) -> bool {
        if seq != self.fetch_seq {
            debug!(seq, current = self.fetch_seq, "discarding stale search results");
            return false;
        }
        self.total = page.total;
        self.total_pages = total_pages(page.total);
        self.dogs = page.dogs;
        true
    }

    /// Fetch the current page: search for the ID page, then resolve records.
    ///
    /// On error nothing is applied; the previous view stands.
    pub async fn refresh(&mut self, api: &dyn AdoptionCatalog) -> Result<(), ApiError> {
        let ticket = self.begin_fetch();
        let id_page = api.search_dogs(&ticket.params).await?;
        let dogs = api.dogs(&id_page.result_ids).await?;
        self.complete_fetch(
            ticket.seq,
            ResultPage {
                dogs,
                total: id_page.total,
            },
        );
        Ok(())
    }
}

/// Union preserving first-seen order.
fn dedupe(zip_codes: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    zip_codes.filter(|zip| seen.insert(zip.clone())).collect()
}
