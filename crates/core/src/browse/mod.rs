//! Browsing the catalog: combined filter state, geographic panel, and the
//! search orchestration screen.
//!
//! All state here is single-owner. Filter mutations reset the page to 1 and
//! the caller re-derives the query by refreshing the screen; refreshes are
//! sequence-token guarded so the newest request always wins.

mod filters;
mod geo;
mod screen;

pub use filters::{
    derive_query, total_pages, CombinedFilters, SortOrder, LOCATION_PAGE_SIZE, PAGE_SIZE,
};
pub use geo::GeoPanel;
pub use screen::{FetchTicket, ResultPage, SearchScreen};
