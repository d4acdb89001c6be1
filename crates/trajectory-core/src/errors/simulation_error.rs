//! Simulation run errors.

use super::error_code::{self, ErrorCode};
use super::ConfigError;

/// Errors that abort a simulation run.
///
/// Numerically degenerate samples never surface here; they fall back to
/// documented values inside the analyzers.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation cancelled after {completed_batches} of {total_batches} batches")]
    Cancelled {
        completed_batches: usize,
        total_batches: usize,
    },
}

impl ErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Cancelled { .. } => error_code::CANCELLED,
        }
    }
}
