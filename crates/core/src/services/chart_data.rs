use crate::models::chart::DataPoint;
use crate::models::series::Observation;

/// Convert a raw observation list into renderable points.
///
/// Rows carrying the missing-value sentinel are dropped outright — never
/// coerced to zero or NaN. A non-sentinel value that fails to parse as a
/// float is also dropped, with a warning; FRED is not supposed to produce
/// such rows.
#[must_use]
pub fn points_from_observations(observations: &[Observation]) -> Vec<DataPoint> {
    observations
        .iter()
        .filter(|obs| !obs.is_missing())
        .filter_map(|obs| match obs.value.parse::<f64>() {
            Ok(value) => Some(DataPoint {
                date: obs.date.clone(),
                value,
            }),
            Err(_) => {
                tracing::warn!(date = %obs.date, value = %obs.value, "unparseable observation dropped");
                None
            }
        })
        .collect()
}

/// Token identifying one in-flight observation fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchToken(u64);

/// Observable state of one chart's data.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDataState {
    Idle,
    Loading,
    Loaded(Vec<DataPoint>),
    /// Rendered as an inline message on the chart card; no retry.
    Failed(String),
}

/// Per-chart fetch state with stale-response suppression.
///
/// Same token scheme as the search session: editing a chart's series or
/// frequency begins a new fetch and bumps the generation, so a slow
/// response from the previous configuration can no longer be applied.
#[derive(Debug)]
pub struct ChartDataSlot {
    generation: u64,
    state: ChartDataState,
}

impl ChartDataSlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ChartDataState::Idle,
        }
    }

    /// Start a fetch, invalidating every outstanding token for this slot.
    pub fn begin(&mut self) -> FetchToken {
        self.generation += 1;
        self.state = ChartDataState::Loading;
        FetchToken(self.generation)
    }

    /// Install fetched points. Returns `false` when the token is stale.
    pub fn apply(&mut self, token: FetchToken, points: Vec<DataPoint>) -> bool {
        if token.0 != self.generation {
            tracing::debug!(token = token.0, current = self.generation, "stale chart data discarded");
            return false;
        }
        self.state = ChartDataState::Loaded(points);
        true
    }

    /// Record a fetch failure. Stale tokens are discarded.
    pub fn fail(&mut self, token: FetchToken, message: impl Into<String>) -> bool {
        if token.0 != self.generation {
            tracing::debug!(token = token.0, current = self.generation, "stale chart failure discarded");
            return false;
        }
        self.state = ChartDataState::Failed(message.into());
        true
    }

    /// Invalidate outstanding tokens without starting a fetch, e.g. after
    /// the chart's series or frequency changed and the old data no longer
    /// corresponds to the configuration.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.state = ChartDataState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> &ChartDataState {
        &self.state
    }

    /// The loaded points, if any.
    #[must_use]
    pub fn points(&self) -> Option<&[DataPoint]> {
        match &self.state {
            ChartDataState::Loaded(points) => Some(points),
            _ => None,
        }
    }
}

impl Default for ChartDataSlot {
    fn default() -> Self {
        Self::new()
    }
}
