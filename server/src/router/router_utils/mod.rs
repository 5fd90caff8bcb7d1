pub mod metrics;
pub mod mock;
