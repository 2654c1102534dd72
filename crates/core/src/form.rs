use std::time::Instant;

use crate::errors::CoreError;
use crate::models::chart::{
    BarStyle, ChartConfig, ChartDraft, ChartStyle, ChartType, LineStyle, TimeFrequency,
};
use crate::models::series::SeriesInfo;
use crate::services::search::{SearchDebouncer, SearchSession, SearchState, SearchToken};

const DEFAULT_COLOR: &str = "#1f77b4";

/// Mutable draft of one chart configuration, as edited by the user.
///
/// The form owns all required-field policy: a draft with an empty title or
/// no selected series fails [`submit`](Self::submit) and never reaches the
/// store. When editing an existing chart the form is pre-filled from it and
/// the caller feeds the submitted draft to `update` instead of `add`.
///
/// It also owns the live series search: keystrokes go through a debouncer,
/// released queries get a token from the search session, and the caller
/// dispatches them to the gateway and reports back with the token — stale
/// responses are discarded by the session.
#[derive(Debug)]
pub struct ChartConfigForm {
    title: String,
    series_id: String,
    series_title: String,
    y_axis_label: String,
    frequency: TimeFrequency,
    color: String,
    chart_type: ChartType,
    line_style: LineStyle,
    bar_style: BarStyle,
    debouncer: SearchDebouncer,
    search: SearchSession,
}

impl ChartConfigForm {
    /// Fresh form with the default field values: line chart, solid stroke,
    /// quarterly frequency, grouped bars, default palette color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series_id: String::new(),
            series_title: String::new(),
            y_axis_label: String::new(),
            frequency: TimeFrequency::Quarterly,
            color: DEFAULT_COLOR.to_string(),
            chart_type: ChartType::Line,
            line_style: LineStyle::Solid,
            bar_style: BarStyle::Grouped,
            debouncer: SearchDebouncer::new(),
            search: SearchSession::new(),
        }
    }

    /// Pre-fill the form from an existing configuration for editing.
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        let mut form = Self::new();
        form.title = config.title.clone();
        form.series_id = config.series_id.clone();
        form.series_title = config.series_title.clone();
        form.y_axis_label = config.y_axis_label.clone();
        form.frequency = config.frequency;
        form.color = config.color.clone();
        form.chart_type = config.chart_type();
        match config.style {
            ChartStyle::Line { line_style } => form.line_style = line_style,
            ChartStyle::Bar { bar_style } => form.bar_style = bar_style,
        }
        form
    }

    // ── Field setters ───────────────────────────────────────────────

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Switching chart type keeps both remembered styles; only the one
    /// matching the current type makes it into the submitted draft.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    pub fn set_y_axis_label(&mut self, label: impl Into<String>) {
        self.y_axis_label = label.into();
    }

    pub fn set_frequency(&mut self, frequency: TimeFrequency) {
        self.frequency = frequency;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    pub fn set_bar_style(&mut self, style: BarStyle) {
        self.bar_style = style;
    }

    /// Pick a series from the search results. Caches the remote title for
    /// the legend and backfills the chart title when it is still empty.
    pub fn select_series(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.series_id = id.into();
        self.series_title = title.into();

        if self.title.trim().is_empty() {
            self.title = self.series_title.clone();
        }
    }

    // ── Live search ─────────────────────────────────────────────────

    /// Record a keystroke in the series search box.
    pub fn search_input(&mut self, query: impl Into<String>, now: Instant) {
        self.debouncer.input(query, now);
    }

    /// Release the debounced query, if any, as a new search request.
    /// The caller dispatches the query to the gateway and reports the
    /// outcome back with the returned token.
    pub fn poll_search(&mut self, now: Instant) -> Option<(SearchToken, String)> {
        let query = self.debouncer.poll(now)?;
        let token = self.search.begin(query.clone());
        Some((token, query))
    }

    /// Install search results; discarded when `token` is stale.
    pub fn apply_search_results(&mut self, token: SearchToken, results: Vec<SeriesInfo>) -> bool {
        self.search.apply(token, results)
    }

    /// Record a search failure; discarded when `token` is stale.
    pub fn fail_search(&mut self, token: SearchToken, message: impl Into<String>) -> bool {
        self.search.fail(token, message)
    }

    #[must_use]
    pub fn search_state(&self) -> &SearchState {
        self.search.state()
    }

    // ── Reads ───────────────────────────────────────────────────────

    #[must_use]
    pub fn selected_series(&self) -> Option<(&str, &str)> {
        if self.series_id.is_empty() {
            None
        } else {
            Some((&self.series_id, &self.series_title))
        }
    }

    /// Whether the required fields are filled, i.e. submit would succeed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.series_id.trim().is_empty()
    }

    // ── Submit ──────────────────────────────────────────────────────

    /// Validate and emit the completed draft.
    ///
    /// Fails with [`CoreError::Validation`] when the title or the selected
    /// series is missing; on failure nothing must be handed to the store.
    pub fn submit(&self) -> Result<ChartDraft, CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation(
                "Chart title is required".to_string(),
            ));
        }
        if self.series_id.trim().is_empty() {
            return Err(CoreError::Validation(
                "A data series must be selected".to_string(),
            ));
        }

        let style = match self.chart_type {
            ChartType::Line => ChartStyle::Line {
                line_style: self.line_style,
            },
            ChartType::Bar => ChartStyle::Bar {
                bar_style: self.bar_style,
            },
        };

        Ok(ChartDraft {
            title: self.title.clone(),
            series_id: self.series_id.clone(),
            series_title: self.series_title.clone(),
            y_axis_label: self.y_axis_label.clone(),
            frequency: self.frequency,
            color: self.color.clone(),
            style,
        })
    }
}

impl Default for ChartConfigForm {
    fn default() -> Self {
        Self::new()
    }
}
