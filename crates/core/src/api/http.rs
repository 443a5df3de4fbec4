//! HTTP implementation of the adoption catalog client.
//!
//! The service authenticates via a session cookie set by `POST /auth/login`;
//! the client keeps it in reqwest's cookie store so every later request
//! carries it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;

use super::types::{
    Dog, DogSearchPage, DogSearchParams, Location, LocationSearchPage, LocationSearchParams,
};
use super::{AdoptionCatalog, ApiError};

/// HTTP client for the adoption service.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check status, returning a typed error for failure responses.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::NotAuthenticated);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }
        Ok(response)
    }
}

fn map_send_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::ConnectionFailed(e.to_string())
    } else {
        ApiError::Api {
            status: 0,
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl AdoptionCatalog for CatalogClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn login(&self, name: &str, email: &str) -> Result<(), ApiError> {
        // The service expects a trimmed name and a trimmed, lowercased email.
        let body = serde_json::json!({
            "name": name.trim(),
            "email": email.trim().to_lowercase(),
        });

        debug!(name = %name.trim(), "logging in");

        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "login failed, check your credentials".to_string());
            return Err(ApiError::AuthFailed(message));
        }

        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/auth/logout"))
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check(response).await?;
        Ok(())
    }

    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.url("/dogs/breeds"))
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("breed list: {e}")))
    }

    async fn search_dogs(&self, params: &DogSearchParams) -> Result<DogSearchPage, ApiError> {
        debug!(
            breeds = params.breeds.len(),
            zip_codes = params.zip_codes.len(),
            from = ?params.from,
            "searching dogs"
        );

        let response = self
            .client
            .get(self.url("/dogs/search"))
            .query(&params.to_query_pairs())
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("search page: {e}")))
    }

    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        let response = self
            .client
            .post(self.url("/dogs"))
            .json(&ids)
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("dog records: {e}")))
    }

    async fn match_dog(&self, ids: &[String]) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.url("/dogs/match"))
            .json(&ids)
            .send()
            .await
            .map_err(map_send_error)?;

        let body: MatchResponse = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("match response: {e}")))?;

        Ok(body.match_id)
    }

    async fn locations(&self, zip_codes: &[String]) -> Result<Vec<Location>, ApiError> {
        let response = self
            .client
            .post(self.url("/locations"))
            .json(&zip_codes)
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("location records: {e}")))
    }

    async fn search_locations(
        &self,
        params: &LocationSearchParams,
    ) -> Result<LocationSearchPage, ApiError> {
        debug!(city = ?params.city, states = ?params.states, "searching locations");

        let response = self
            .client
            .post(self.url("/locations/search"))
            .json(params)
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("location page: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(rename = "match")]
    match_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
