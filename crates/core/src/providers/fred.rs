use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;

use super::traits::SeriesProvider;
use crate::errors::CoreError;
use crate::models::chart::TimeFrequency;
use crate::models::series::{Observation, ObservationsResponse, SeriesInfo, SeriesSearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred";

const PROVIDER_NAME: &str = "FRED";

/// Configuration for the FRED gateway.
///
/// The base URL is overridable so tests and CORS proxies can point the
/// provider elsewhere; the API key defaults to the `FRED_API_KEY`
/// environment variable.
#[derive(Debug, Clone)]
pub struct FredConfig {
    pub api_key: String,
    pub base_url: String,
}

impl FredConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for FredConfig {
    fn default() -> Self {
        let api_key = std::env::var("FRED_API_KEY").unwrap_or_default();
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// FRED (Federal Reserve Economic Data) gateway.
///
/// - **Key**: free API key required (https://fred.stlouisfed.org).
/// - **Coverage**: 800k+ US and international economic time series.
/// - **Endpoints**: `/series/search`, `/series/observations`.
///
/// Both endpoints return JSON; observation values arrive as strings with
/// `"."` marking missing data. Failures are surfaced to the caller as
/// inline error state — there is no retry here.
#[derive(Debug)]
pub struct FredProvider {
    config: FredConfig,
    client: Client,
}

impl FredProvider {
    pub fn new(config: FredConfig) -> Result<Self, CoreError> {
        if config.api_key.is_empty() {
            return Err(CoreError::MissingApiKey);
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Ok(Self { config, client })
    }

    /// Convenience constructor using `FRED_API_KEY` from the environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::new(FredConfig::default())
    }

    /// Build the search request. Query parameters are encoded by reqwest.
    pub fn search_request(&self, query: &str) -> Result<Request, CoreError> {
        let request = self
            .client
            .get(format!("{}/series/search", self.config.base_url))
            .query(&[
                ("search_text", query),
                ("api_key", self.config.api_key.as_str()),
                ("file_type", "json"),
            ])
            .build()?;
        Ok(request)
    }

    /// Build the observations request for a series at a given frequency.
    pub fn observations_request(
        &self,
        series_id: &str,
        frequency: TimeFrequency,
    ) -> Result<Request, CoreError> {
        let request = self
            .client
            .get(format!("{}/series/observations", self.config.base_url))
            .query(&[
                ("series_id", series_id),
                ("frequency", frequency.as_param()),
                ("api_key", self.config.api_key.as_str()),
                ("file_type", "json"),
            ])
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl SeriesProvider for FredProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn search_series(&self, query: &str) -> Result<Vec<SeriesInfo>, CoreError> {
        let request = self.search_request(query)?;

        let response = self.client.execute(request).await?;
        if !response.status().is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Series search failed with HTTP {}", response.status()),
            });
        }

        let parsed: SeriesSearchResponse =
            response.json().await.map_err(|e| CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Failed to parse search response: {e}"),
            })?;

        tracing::debug!(results = parsed.seriess.len(), "series search completed");
        Ok(parsed.seriess)
    }

    async fn get_observations(
        &self,
        series_id: &str,
        frequency: TimeFrequency,
    ) -> Result<Vec<Observation>, CoreError> {
        let request = self.observations_request(series_id, frequency)?;

        let response = self.client.execute(request).await?;
        if !response.status().is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!(
                    "Observations fetch for {series_id} failed with HTTP {}",
                    response.status()
                ),
            });
        }

        let parsed: ObservationsResponse =
            response.json().await.map_err(|e| CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Failed to parse observations for {series_id}: {e}"),
            })?;

        Ok(parsed.observations)
    }
}
