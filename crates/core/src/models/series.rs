use serde::{Deserialize, Serialize};

/// Raw value FRED reports for a date with no observation.
pub const MISSING_VALUE: &str = ".";

/// One candidate series returned by the FRED search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInfo {
    pub id: String,
    pub title: String,
    pub frequency: String,
    pub units: String,
}

/// Response envelope of `GET /fred/series/search`.
///
/// `seriess` (sic) is the field name FRED actually uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSearchResponse {
    pub seriess: Vec<SeriesInfo>,
}

/// One raw (date, value) sample of a series.
///
/// `value` is a string on the wire; the literal `"."` marks a missing
/// observation and must be filtered out before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub date: String,
    pub value: String,
}

impl Observation {
    /// Whether this observation carries the missing-data sentinel.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.value == MISSING_VALUE
    }
}

/// Response envelope of `GET /fred/series/observations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationsResponse {
    pub observations: Vec<Observation>,
}
