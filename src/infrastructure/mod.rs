pub mod disabled;
pub mod memory;
pub mod sheets;
