pub mod errors;
pub mod form;
pub mod models;
pub mod providers;
pub mod services;
pub mod store;

use std::collections::HashMap;

use uuid::Uuid;

use errors::CoreError;
use models::chart::{ChartConfig, ChartConfigUpdate, ChartDraft, DataPoint};
use models::series::SeriesInfo;
use providers::fred::FredProvider;
use providers::traits::SeriesProvider;
use services::chart_data::{points_from_observations, ChartDataSlot, ChartDataState};
use services::render::ChartView;
use store::{ChartStore, SubscriptionId};

/// Main entry point for the FRED charts core library.
///
/// Composes the chart configuration store, the remote series gateway, and
/// the per-chart data state. A frontend drives this from its single UI
/// thread: all store mutations are synchronous and atomic, and subscribers
/// have been notified by the time a mutating call returns. Only the gateway
/// calls are async.
#[must_use]
pub struct ChartDashboard {
    store: ChartStore,
    provider: Box<dyn SeriesProvider>,
    data_slots: HashMap<Uuid, ChartDataSlot>,
}

impl std::fmt::Debug for ChartDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartDashboard")
            .field("charts", &self.store.len())
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl ChartDashboard {
    /// Build a dashboard on top of any series gateway.
    pub fn new(provider: Box<dyn SeriesProvider>) -> Self {
        Self {
            store: ChartStore::new(),
            provider,
            data_slots: HashMap::new(),
        }
    }

    /// Build a dashboard backed by the FRED API, with the key taken from
    /// the `FRED_API_KEY` environment variable.
    pub fn with_fred() -> Result<Self, CoreError> {
        let provider = FredProvider::from_env()?;
        Ok(Self::new(Box::new(provider)))
    }

    // ── Chart Management ────────────────────────────────────────────

    /// Add a chart configuration and return its assigned id.
    ///
    /// The caller (the form) is responsible for having validated required
    /// fields; the store itself accepts any draft.
    pub fn add_chart(&mut self, draft: ChartDraft) -> Uuid {
        let id = self.store.add(draft);
        self.data_slots.insert(id, ChartDataSlot::new());
        id
    }

    /// Merge a partial update into an existing chart. Returns `false` for
    /// an unknown id, leaving everything unchanged.
    ///
    /// Changing the series or frequency orphans any in-flight data fetch
    /// for this chart, so a late response from the old configuration can
    /// no longer be applied.
    pub fn update_chart(&mut self, id: Uuid, update: &ChartConfigUpdate) -> bool {
        let updated = self.store.update(id, update);
        if updated && (update.series_id.is_some() || update.frequency.is_some()) {
            if let Some(slot) = self.data_slots.get_mut(&id) {
                slot.invalidate();
            }
        }
        updated
    }

    /// Remove a chart and its data state. Returns `false` for an unknown
    /// id. Any fetch still in flight for the removed chart resolves against
    /// a missing slot and is dropped.
    pub fn remove_chart(&mut self, id: Uuid) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.data_slots.remove(&id);
        }
        removed
    }

    /// The ordered collection of chart configurations.
    #[must_use]
    pub fn charts(&self) -> &[ChartConfig] {
        self.store.charts()
    }

    /// Look up one chart by id.
    #[must_use]
    pub fn chart(&self, id: Uuid) -> Option<&ChartConfig> {
        self.store.get(id)
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.store.len()
    }

    // ── Observers ───────────────────────────────────────────────────

    /// Register a listener for collection changes; see
    /// [`ChartStore::subscribe`].
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&[ChartConfig]) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.store.unsubscribe(subscription)
    }

    // ── Gateway ─────────────────────────────────────────────────────

    /// Free-text series search against the gateway.
    pub async fn search_series(&self, query: &str) -> Result<Vec<SeriesInfo>, CoreError> {
        self.provider.search_series(query).await
    }

    /// Fetch, filter, and install the data for one chart.
    ///
    /// Missing-value rows are dropped during conversion. On failure the
    /// chart's data state records the message for inline display and the
    /// error is also returned; nothing is retried.
    pub async fn load_chart_data(&mut self, id: Uuid) -> Result<&[DataPoint], CoreError> {
        let config = self
            .store
            .get(id)
            .ok_or_else(|| CoreError::ChartNotFound(id.to_string()))?;
        let series_id = config.series_id.clone();
        let frequency = config.frequency;

        let token = self
            .data_slots
            .entry(id)
            .or_insert_with(ChartDataSlot::new)
            .begin();

        let fetched = self.provider.get_observations(&series_id, frequency).await;

        // The chart may have been removed while the request was in flight;
        // a result with no slot to land in is simply dropped.
        let Some(slot) = self.data_slots.get_mut(&id) else {
            return Err(CoreError::ChartNotFound(id.to_string()));
        };

        match fetched {
            Ok(observations) => {
                let points = points_from_observations(&observations);
                slot.apply(token, points);
                match slot.points() {
                    Some(points) => Ok(points),
                    None => Ok(&[]),
                }
            }
            Err(e) => {
                slot.fail(token, e.to_string());
                Err(e)
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// The data state of one chart (idle/loading/loaded/failed).
    #[must_use]
    pub fn chart_data_state(&self, id: Uuid) -> Option<&ChartDataState> {
        self.data_slots.get(&id).map(ChartDataSlot::state)
    }

    /// Assemble the render-ready view for one chart from its configuration
    /// and whatever data has been loaded so far (empty until a fetch
    /// succeeds).
    pub fn chart_view(&self, id: Uuid) -> Result<ChartView, CoreError> {
        let config = self
            .store
            .get(id)
            .ok_or_else(|| CoreError::ChartNotFound(id.to_string()))?;
        let points = self
            .data_slots
            .get(&id)
            .and_then(ChartDataSlot::points)
            .map(<[DataPoint]>::to_vec)
            .unwrap_or_default();
        Ok(ChartView::prepare(config, points))
    }
}
