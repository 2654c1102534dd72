use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::chart::TimeFrequency;
use crate::models::series::{Observation, SeriesInfo};

/// Trait abstraction for the remote series gateway.
///
/// The production implementation talks to the FRED HTTP API. Tests swap in
/// mocks — if the API changes, only the one implementation changes and the
/// rest of the codebase is untouched.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Free-text search for candidate series.
    async fn search_series(&self, query: &str) -> Result<Vec<SeriesInfo>, CoreError>;

    /// Fetch the raw observation list for a series at a given frequency.
    /// Observations are returned in the gateway's time order, missing
    /// values still marked with the sentinel.
    async fn get_observations(
        &self,
        series_id: &str,
        frequency: TimeFrequency,
    ) -> Result<Vec<Observation>, CoreError>;
}
