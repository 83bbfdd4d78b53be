pub mod accumulator_service;
pub mod chart_service;
pub mod query_service;
pub mod tracking_service;
