use serde::Serialize;

use crate::models::chart::{BarStyle, ChartConfig, ChartStyle, DataPoint, LineStyle};

impl LineStyle {
    /// SVG stroke-dasharray pattern for this stroke style.
    #[must_use]
    pub fn dash_pattern(&self) -> &'static str {
        match self {
            LineStyle::Solid => "0",
            LineStyle::Dashed => "5 5",
            LineStyle::Dotted => "1 5",
        }
    }
}

/// How the frontend should draw the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderKind {
    Line { dash_pattern: &'static str },
    Bar { stacked: bool },
}

/// Everything a dumb frontend needs to draw one chart.
///
/// The core computes this — the frontend just renders. Missing-value rows
/// have already been filtered out of `points`; an empty list means "no data
/// available for the selected series" and is shown as such.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub title: String,
    /// Legend entry — the cached remote series name
    pub series_name: String,
    pub y_axis_label: String,
    pub color: String,
    pub kind: RenderKind,
    pub points: Vec<DataPoint>,
}

impl ChartView {
    /// Assemble a view from a configuration and its fetched points.
    #[must_use]
    pub fn prepare(config: &ChartConfig, points: Vec<DataPoint>) -> Self {
        let kind = match config.style {
            ChartStyle::Line { line_style } => RenderKind::Line {
                dash_pattern: line_style.dash_pattern(),
            },
            ChartStyle::Bar { bar_style } => RenderKind::Bar {
                stacked: bar_style == BarStyle::Stacked,
            },
        };

        Self {
            title: config.title.clone(),
            series_name: config.series_title.clone(),
            y_axis_label: config.y_axis_label.clone(),
            color: config.color.clone(),
            kind,
            points,
        }
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
    }
}
