//! Error handling for Trajectory.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use simulation_error::SimulationError;
