pub mod chart;
pub mod series;
