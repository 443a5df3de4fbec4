//! Typed client for the remote adoption service.
//!
//! Pure request/response translation over the REST boundary. No retry, no
//! caching; callers decide how to degrade on failure.

mod http;
mod types;

pub use http::CatalogClient;
pub use types::{
    Coordinates, Dog, DogSearchPage, DogSearchParams, GeoBoundingBox, Location,
    LocationSearchPage, LocationSearchParams,
};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the adoption service boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("login rejected: {0}")]
    AuthFailed(String),

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("request timeout")]
    Timeout,

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// The remote adoption catalog boundary.
///
/// Implemented by [`CatalogClient`] over HTTP and by
/// [`crate::testing::MockCatalog`] for tests.
#[async_trait]
pub trait AdoptionCatalog: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Authenticate and establish a session cookie.
    async fn login(&self, name: &str, email: &str) -> Result<(), ApiError>;

    /// Invalidate the session cookie.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Ordered list of known breed names.
    async fn breeds(&self) -> Result<Vec<String>, ApiError>;

    /// Search the catalog, returning an ordered ID page plus total count.
    async fn search_dogs(&self, params: &DogSearchParams) -> Result<DogSearchPage, ApiError>;

    /// Resolve full dog records for a list of IDs.
    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError>;

    /// Submit a favorites list; the service selects one ID as the match.
    async fn match_dog(&self, ids: &[String]) -> Result<String, ApiError>;

    /// Resolve location records for a list of ZIP codes.
    async fn locations(&self, zip_codes: &[String]) -> Result<Vec<Location>, ApiError>;

    /// Search locations by city, state list, or bounding box.
    async fn search_locations(
        &self,
        params: &LocationSearchParams,
    ) -> Result<LocationSearchPage, ApiError>;
}
