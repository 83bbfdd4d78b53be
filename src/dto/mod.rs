pub mod chart_column;
pub mod chart_model;
pub mod chart_spec;
