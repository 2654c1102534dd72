pub mod chart_data;
pub mod render;
pub mod search;
