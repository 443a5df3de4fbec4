//! Combined filter state and query derivation.

use crate::api::DogSearchParams;

/// Fixed page size for dog search results.
pub const PAGE_SIZE: u32 = 20;

/// Page size used for location lookups that feed the ZIP filter.
pub const LOCATION_PAGE_SIZE: u32 = 100;

/// Sort order on the breed field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// The `sort` query parameter value.
    pub fn sort_param(self) -> &'static str {
        match self {
            SortOrder::Ascending => "breed:asc",
            SortOrder::Descending => "breed:desc",
        }
    }
}

/// The orchestration screen's merged view of all active filters.
///
/// The sole input to query derivation. Every filter mutation resets `page`
/// to 1; only explicit page navigation changes it otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedFilters {
    /// Selected breed names.
    pub breeds: Vec<String>,
    /// Resolved ZIP-code filter.
    pub zip_codes: Vec<String>,
    /// Exact age filter.
    pub age: Option<u8>,
    /// Sort order on the breed field.
    pub sort: SortOrder,
    /// Current page, 1-based.
    pub page: u32,
}

impl Default for CombinedFilters {
    fn default() -> Self {
        Self {
            breeds: Vec::new(),
            zip_codes: Vec::new(),
            age: None,
            sort: SortOrder::default(),
            page: 1,
        }
    }
}

/// Derive the remote search query from the combined filter state.
///
/// Pure: called after every state transition instead of scattering fetch
/// parameters across input handlers. The age filter maps to an inclusive
/// `[age, age]` bound; an empty ZIP filter omits the key entirely.
pub fn derive_query(filters: &CombinedFilters) -> DogSearchParams {
    DogSearchParams {
        breeds: filters.breeds.clone(),
        zip_codes: filters.zip_codes.clone(),
        age_min: filters.age,
        age_max: filters.age,
        size: Some(PAGE_SIZE),
        from: Some((filters.page - 1) * PAGE_SIZE),
        sort: Some(filters.sort.sort_param().to_string()),
    }
}

/// Total page count at the fixed page size.
pub fn total_pages(total: u32) -> u32 {
    total.div_ceil(PAGE_SIZE)
}
