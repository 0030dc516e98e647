pub mod psychology_entry;
pub mod strategy;
pub mod trade;
