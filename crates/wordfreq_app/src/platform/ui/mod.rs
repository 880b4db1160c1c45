pub mod chart_options;
pub mod constants;
pub mod render;
