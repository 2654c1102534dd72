use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of chart a configuration renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Line => write!(f, "Line"),
            ChartType::Bar => write!(f, "Bar"),
        }
    }
}

/// FRED observation frequency. The wire parameter is the short code
/// (`q`, `sa`, `a`) expected by the observations endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrequency {
    #[serde(rename = "q")]
    Quarterly,
    #[serde(rename = "sa")]
    SemiAnnual,
    #[serde(rename = "a")]
    Annual,
}

impl TimeFrequency {
    /// The query-parameter value for the FRED observations endpoint.
    #[must_use]
    pub fn as_param(&self) -> &'static str {
        match self {
            TimeFrequency::Quarterly => "q",
            TimeFrequency::SemiAnnual => "sa",
            TimeFrequency::Annual => "a",
        }
    }
}

impl std::fmt::Display for TimeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFrequency::Quarterly => write!(f, "Quarterly"),
            TimeFrequency::SemiAnnual => write!(f, "Semi Annual"),
            TimeFrequency::Annual => write!(f, "Annual"),
        }
    }
}

/// Stroke style for line charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Layout for bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarStyle {
    Grouped,
    Stacked,
}

/// Type-specific styling for a chart.
///
/// The chart type and its style travel together: a line chart can only
/// carry a line style and a bar chart only a bar style, so there is never
/// an inactive style field for the renderer to ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "chart_type", rename_all = "lowercase")]
pub enum ChartStyle {
    Line { line_style: LineStyle },
    Bar { bar_style: BarStyle },
}

impl ChartStyle {
    /// Line chart with the default solid stroke.
    #[must_use]
    pub fn line() -> Self {
        ChartStyle::Line {
            line_style: LineStyle::Solid,
        }
    }

    /// Bar chart with the default grouped layout.
    #[must_use]
    pub fn bar() -> Self {
        ChartStyle::Bar {
            bar_style: BarStyle::Grouped,
        }
    }

    /// The chart type this style belongs to.
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartStyle::Line { .. } => ChartType::Line,
            ChartStyle::Bar { .. } => ChartType::Bar,
        }
    }
}

/// One user-authored chart definition.
///
/// Created via [`ChartStore::add`](crate::store::ChartStore::add), which
/// assigns the id. The id is immutable for the lifetime of the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Unique identifier, assigned by the store at creation
    pub id: Uuid,

    /// Display title shown above the chart
    pub title: String,

    /// FRED series identifier (e.g., "GDP", "UNRATE")
    pub series_id: String,

    /// Cached display copy of the remote series' name, for the legend
    pub series_title: String,

    /// Label for the y-axis
    pub y_axis_label: String,

    /// Observation frequency requested from FRED
    pub frequency: TimeFrequency,

    /// Color specification (e.g., "#1f77b4")
    pub color: String,

    /// Chart type plus its type-specific style
    pub style: ChartStyle,
}

impl ChartConfig {
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.style.chart_type()
    }
}

/// A chart definition missing only its identifier — the input to
/// [`ChartStore::add`](crate::store::ChartStore::add).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDraft {
    pub title: String,
    pub series_id: String,
    pub series_title: String,
    pub y_axis_label: String,
    pub frequency: TimeFrequency,
    pub color: String,
    pub style: ChartStyle,
}

impl ChartDraft {
    /// Attach a store-assigned identifier, producing a full config.
    #[must_use]
    pub fn into_config(self, id: Uuid) -> ChartConfig {
        ChartConfig {
            id,
            title: self.title,
            series_id: self.series_id,
            series_title: self.series_title,
            y_axis_label: self.y_axis_label,
            frequency: self.frequency,
            color: self.color,
            style: self.style,
        }
    }
}

/// A partial update to an existing chart configuration.
///
/// Only supplied fields are changed; everything else is retained.
/// The identifier can never be altered through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigUpdate {
    pub title: Option<String>,
    pub series_id: Option<String>,
    pub series_title: Option<String>,
    pub y_axis_label: Option<String>,
    pub frequency: Option<TimeFrequency>,
    pub color: Option<String>,
    pub style: Option<ChartStyle>,
}

impl ChartConfigUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.series_id.is_none()
            && self.series_title.is_none()
            && self.y_axis_label.is_none()
            && self.frequency.is_none()
            && self.color.is_none()
            && self.style.is_none()
    }

    /// Shallow-merge the supplied fields over `config`.
    pub fn apply(&self, config: &mut ChartConfig) {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(series_id) = &self.series_id {
            config.series_id = series_id.clone();
        }
        if let Some(series_title) = &self.series_title {
            config.series_title = series_title.clone();
        }
        if let Some(y_axis_label) = &self.y_axis_label {
            config.y_axis_label = y_axis_label.clone();
        }
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }
        if let Some(color) = &self.color {
            config.color = color.clone();
        }
        if let Some(style) = self.style {
            config.style = style;
        }
    }

    // ── Builder-style setters ───────────────────────────────────────

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn series(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.series_id = Some(id.into());
        self.series_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn y_axis_label(mut self, label: impl Into<String>) -> Self {
        self.y_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn frequency(mut self, frequency: TimeFrequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: ChartStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// A single renderable point derived from a FRED observation.
///
/// Never stored — recomputed from the raw observation list on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Observation date as reported by FRED (e.g., "2020-01-01")
    pub date: String,

    /// Parsed numeric value
    pub value: f64,
}
