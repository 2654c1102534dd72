// ═══════════════════════════════════════════════════════════════════
// Model Tests — chart types, styles, updates, FRED wire types
// ═══════════════════════════════════════════════════════════════════

use fred_charts_core::models::chart::{
    BarStyle, ChartConfigUpdate, ChartDraft, ChartStyle, ChartType, DataPoint, LineStyle,
    TimeFrequency,
};
use fred_charts_core::models::series::{
    Observation, ObservationsResponse, SeriesSearchResponse, MISSING_VALUE,
};
use uuid::Uuid;

fn draft() -> ChartDraft {
    ChartDraft {
        title: "GDP".to_string(),
        series_id: "GDP".to_string(),
        series_title: "Gross Domestic Product".to_string(),
        y_axis_label: "Billions of Dollars".to_string(),
        frequency: TimeFrequency::Quarterly,
        color: "#1f77b4".to_string(),
        style: ChartStyle::line(),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TimeFrequency
// ═══════════════════════════════════════════════════════════════════

mod time_frequency {
    use super::*;

    #[test]
    fn wire_params() {
        assert_eq!(TimeFrequency::Quarterly.as_param(), "q");
        assert_eq!(TimeFrequency::SemiAnnual.as_param(), "sa");
        assert_eq!(TimeFrequency::Annual.as_param(), "a");
    }

    #[test]
    fn display() {
        assert_eq!(TimeFrequency::Quarterly.to_string(), "Quarterly");
        assert_eq!(TimeFrequency::SemiAnnual.to_string(), "Semi Annual");
        assert_eq!(TimeFrequency::Annual.to_string(), "Annual");
    }

    #[test]
    fn serde_uses_short_codes() {
        assert_eq!(
            serde_json::to_string(&TimeFrequency::SemiAnnual).unwrap(),
            "\"sa\""
        );
        let back: TimeFrequency = serde_json::from_str("\"q\"").unwrap();
        assert_eq!(back, TimeFrequency::Quarterly);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartStyle
// ═══════════════════════════════════════════════════════════════════

mod chart_style {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(
            ChartStyle::line(),
            ChartStyle::Line {
                line_style: LineStyle::Solid
            }
        );
        assert_eq!(
            ChartStyle::bar(),
            ChartStyle::Bar {
                bar_style: BarStyle::Grouped
            }
        );
    }

    #[test]
    fn chart_type_derives_from_variant() {
        assert_eq!(ChartStyle::line().chart_type(), ChartType::Line);
        assert_eq!(ChartStyle::bar().chart_type(), ChartType::Bar);
    }

    #[test]
    fn serde_tags_with_chart_type() {
        let json = serde_json::to_string(&ChartStyle::Line {
            line_style: LineStyle::Dotted,
        })
        .unwrap();
        assert_eq!(json, r#"{"chart_type":"line","line_style":"dotted"}"#);

        let back: ChartStyle =
            serde_json::from_str(r#"{"chart_type":"bar","bar_style":"stacked"}"#).unwrap();
        assert_eq!(
            back,
            ChartStyle::Bar {
                bar_style: BarStyle::Stacked
            }
        );
    }

    #[test]
    fn a_line_chart_carries_no_bar_style() {
        // The tagged union makes the inactive style unrepresentable; its
        // serialized form must not mention one either.
        let json = serde_json::to_string(&ChartStyle::line()).unwrap();
        assert!(!json.contains("bar_style"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartDraft / ChartConfig
// ═══════════════════════════════════════════════════════════════════

mod chart_config {
    use super::*;

    #[test]
    fn into_config_attaches_the_given_id() {
        let id = Uuid::new_v4();
        let config = draft().into_config(id);
        assert_eq!(config.id, id);
        assert_eq!(config.title, "GDP");
        assert_eq!(config.series_title, "Gross Domestic Product");
    }

    #[test]
    fn serde_roundtrip() {
        let config = draft().into_config(Uuid::new_v4());
        let json = serde_json::to_string(&config).unwrap();
        let back = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartConfigUpdate
// ═══════════════════════════════════════════════════════════════════

mod chart_config_update {
    use super::*;

    #[test]
    fn new_update_is_empty() {
        assert!(ChartConfigUpdate::new().is_empty());
        assert!(!ChartConfigUpdate::new().title("x").is_empty());
    }

    #[test]
    fn apply_overrides_only_supplied_fields() {
        let mut config = draft().into_config(Uuid::new_v4());
        let update = ChartConfigUpdate::new()
            .y_axis_label("Percent")
            .color("#2ca02c");

        update.apply(&mut config);

        assert_eq!(config.y_axis_label, "Percent");
        assert_eq!(config.color, "#2ca02c");
        assert_eq!(config.title, "GDP");
        assert_eq!(config.frequency, TimeFrequency::Quarterly);
    }

    #[test]
    fn series_setter_updates_id_and_cached_title_together() {
        let mut config = draft().into_config(Uuid::new_v4());
        ChartConfigUpdate::new()
            .series("UNRATE", "Unemployment Rate")
            .apply(&mut config);

        assert_eq!(config.series_id, "UNRATE");
        assert_eq!(config.series_title, "Unemployment Rate");
    }

    #[test]
    fn empty_update_applies_as_identity() {
        let mut config = draft().into_config(Uuid::new_v4());
        let before = config.clone();
        ChartConfigUpdate::new().apply(&mut config);
        assert_eq!(config, before);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FRED wire types
// ═══════════════════════════════════════════════════════════════════

mod wire_types {
    use super::*;

    #[test]
    fn observation_missing_sentinel() {
        let missing = Observation {
            date: "2020-02-01".to_string(),
            value: MISSING_VALUE.to_string(),
        };
        let present = Observation {
            date: "2020-01-01".to_string(),
            value: "1.5".to_string(),
        };
        assert!(missing.is_missing());
        assert!(!present.is_missing());
    }

    #[test]
    fn search_response_parses_fred_shape() {
        // Field is spelled "seriess" in the actual FRED payload.
        let json = r#"{
            "realtime_start": "2024-01-01",
            "seriess": [
                {"id": "GDP", "title": "Gross Domestic Product",
                 "frequency": "Quarterly", "units": "Billions of Dollars",
                 "popularity": 93},
                {"id": "GDPC1", "title": "Real Gross Domestic Product",
                 "frequency": "Quarterly", "units": "Billions of Chained 2017 Dollars"}
            ]
        }"#;

        let parsed: SeriesSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.seriess.len(), 2);
        assert_eq!(parsed.seriess[0].id, "GDP");
        assert_eq!(parsed.seriess[1].title, "Real Gross Domestic Product");
        assert_eq!(parsed.seriess[0].units, "Billions of Dollars");
    }

    #[test]
    fn observations_response_parses_fred_shape() {
        let json = r#"{
            "units": "lin",
            "observations": [
                {"realtime_start": "2024-01-01", "date": "2020-01-01", "value": "21538.032"},
                {"date": "2020-04-01", "value": "."}
            ]
        }"#;

        let parsed: ObservationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.observations.len(), 2);
        assert_eq!(parsed.observations[0].value, "21538.032");
        assert!(parsed.observations[1].is_missing());
    }

    #[test]
    fn data_point_serde_roundtrip() {
        let point = DataPoint {
            date: "2020-01-01".to_string(),
            value: 1.5,
        };
        let json = serde_json::to_string(&point).unwrap();
        let back: DataPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
