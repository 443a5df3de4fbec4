//! Mock adoption catalog for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::api::{
    AdoptionCatalog, ApiError, Dog, DogSearchPage, DogSearchParams, Location, LocationSearchPage,
    LocationSearchParams,
};

/// Mock implementation of the [`AdoptionCatalog`] trait.
///
/// Provides controllable behavior for testing:
/// - Serve a configurable dog and location corpus with real filtering,
///   sorting and pagination semantics
/// - Track search and match calls for assertions
/// - Inject failures
///
/// # Example
///
/// ```rust,ignore
/// use pawfinder_core::testing::{fixtures, MockCatalog};
///
/// let catalog = MockCatalog::new();
/// catalog.set_dogs(vec![
///     fixtures::dog("a", "Ace", "Pug", 2, "10001"),
/// ]).await;
///
/// let page = catalog.search_dogs(&DogSearchParams::default()).await?;
/// assert_eq!(page.total, 1);
/// ```
#[derive(Default)]
pub struct MockCatalog {
    breeds: RwLock<Vec<String>>,
    dogs: RwLock<Vec<Dog>>,
    locations: RwLock<Vec<Location>>,
    /// Overrides the default pick-first match behavior.
    match_result: RwLock<Option<String>>,
    /// If set, the next call fails with this error.
    next_error: RwLock<Option<ApiError>>,
    dog_searches: RwLock<Vec<DogSearchParams>>,
    location_searches: RwLock<Vec<LocationSearchParams>>,
    logins: RwLock<Vec<(String, String)>>,
    match_calls: RwLock<usize>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breed list returned by `breeds()`.
    pub async fn set_breeds(&self, breeds: Vec<String>) {
        *self.breeds.write().await = breeds;
    }

    /// Set the dog corpus served by searches and lookups.
    pub async fn set_dogs(&self, dogs: Vec<Dog>) {
        *self.dogs.write().await = dogs;
    }

    /// Set the location corpus served by location searches and lookups.
    pub async fn set_locations(&self, locations: Vec<Location>) {
        *self.locations.write().await = locations;
    }

    /// Force the next match submission to select this ID.
    pub async fn set_match_result(&self, id: &str) {
        *self.match_result.write().await = Some(id.to_string());
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: ApiError) {
        *self.next_error.write().await = Some(error);
    }

    /// Recorded dog search parameters, in call order.
    pub async fn recorded_dog_searches(&self) -> Vec<DogSearchParams> {
        self.dog_searches.read().await.clone()
    }

    /// Recorded location search parameters, in call order.
    pub async fn recorded_location_searches(&self) -> Vec<LocationSearchParams> {
        self.location_searches.read().await.clone()
    }

    /// Recorded `(name, email)` login pairs.
    pub async fn recorded_logins(&self) -> Vec<(String, String)> {
        self.logins.read().await.clone()
    }

    /// Number of dog searches performed.
    pub async fn search_count(&self) -> usize {
        self.dog_searches.read().await.len()
    }

    /// Number of match submissions performed.
    pub async fn match_count(&self) -> usize {
        *self.match_calls.read().await
    }

    async fn take_error(&self) -> Option<ApiError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl AdoptionCatalog for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    async fn login(&self, name: &str, email: &str) -> Result<(), ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        self.logins
            .write()
            .await
            .push((name.to_string(), email.to_string()));
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(())
    }

    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(self.breeds.read().await.clone())
    }

    async fn search_dogs(&self, params: &DogSearchParams) -> Result<DogSearchPage, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.dog_searches.write().await.push(params.clone());

        let mut matching: Vec<Dog> = self
            .dogs
            .read()
            .await
            .iter()
            .filter(|dog| params.breeds.is_empty() || params.breeds.contains(&dog.breed))
            .filter(|dog| params.zip_codes.is_empty() || params.zip_codes.contains(&dog.zip_code))
            .filter(|dog| params.age_min.is_none_or(|min| dog.age >= min))
            .filter(|dog| params.age_max.is_none_or(|max| dog.age <= max))
            .cloned()
            .collect();

        match params.sort.as_deref() {
            Some("breed:desc") => matching.sort_by(|a, b| b.breed.cmp(&a.breed)),
            _ => matching.sort_by(|a, b| a.breed.cmp(&b.breed)),
        }

        let total = matching.len() as u32;
        let from = params.from.unwrap_or(0) as usize;
        let size = params.size.unwrap_or(25) as usize;

        let result_ids = matching
            .into_iter()
            .skip(from)
            .take(size)
            .map(|dog| dog.id)
            .collect();

        Ok(DogSearchPage { result_ids, total })
    }

    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let corpus = self.dogs.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| corpus.iter().find(|dog| &dog.id == id).cloned())
            .collect())
    }

    async fn match_dog(&self, ids: &[String]) -> Result<String, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        *self.match_calls.write().await += 1;

        if let Some(configured) = self.match_result.read().await.clone() {
            return Ok(configured);
        }

        ids.first().cloned().ok_or(ApiError::Api {
            status: 400,
            message: "no ids submitted".to_string(),
        })
    }

    async fn locations(&self, zip_codes: &[String]) -> Result<Vec<Location>, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let corpus = self.locations.read().await;
        Ok(zip_codes
            .iter()
            .filter_map(|zip| corpus.iter().find(|loc| &loc.zip_code == zip).cloned())
            .collect())
    }

    async fn search_locations(
        &self,
        params: &LocationSearchParams,
    ) -> Result<LocationSearchPage, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.location_searches.write().await.push(params.clone());

        let matching: Vec<Location> = self
            .locations
            .read()
            .await
            .iter()
            .filter(|loc| {
                params.city.as_ref().is_none_or(|city| {
                    loc.city.to_lowercase().contains(&city.to_lowercase())
                })
            })
            .filter(|loc| {
                params
                    .states
                    .as_ref()
                    .is_none_or(|states| states.contains(&loc.state))
            })
            .cloned()
            .collect();

        let total = matching.len() as u32;
        let from = params.from.unwrap_or(0) as usize;
        let size = params.size.unwrap_or(25) as usize;

        let results = matching.into_iter().skip(from).take(size).collect();

        Ok(LocationSearchPage { results, total })
    }
}
