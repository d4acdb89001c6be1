//! Logging setup and the field names shared by engine log events.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
