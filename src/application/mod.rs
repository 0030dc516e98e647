pub mod cache;
pub mod grouping;
pub mod metrics;
pub mod psychology;
pub mod strategies;
pub mod trades;
