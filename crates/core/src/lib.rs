pub mod api;
pub mod browse;
pub mod config;
pub mod favorites;
pub mod pagination;
pub mod search;
pub mod session;
pub mod testing;

pub use api::{
    AdoptionCatalog, ApiError, CatalogClient, Dog, DogSearchPage, DogSearchParams, Location,
    LocationSearchPage, LocationSearchParams,
};
pub use browse::{
    derive_query, total_pages, CombinedFilters, GeoPanel, SearchScreen, SortOrder, PAGE_SIZE,
};
pub use config::{load_config, load_config_from_str, ApiConfig, Config, ConfigError};
pub use favorites::{Favorites, MatchOutcome};
pub use pagination::{page_window, PageItem};
pub use search::{Criterion, CriterionSet, SearchBox, SearchBoxEvent};
pub use session::{Session, SessionError, SessionStore};
