//! Subscriber installation for binaries and tests embedding the engine.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INSTALL: Once = Once::new();

/// Variable read for filter directives, e.g.
/// `TRAJECTORY_LOG=trajectory_sim::batch=debug,trajectory_sim=info`.
pub const LOG_ENV_VAR: &str = "TRAJECTORY_LOG";

/// Directive used when [`LOG_ENV_VAR`] is absent or does not parse.
pub const DEFAULT_DIRECTIVE: &str = "trajectory=info";

/// Filter built from [`LOG_ENV_VAR`], or [`DEFAULT_DIRECTIVE`] in its place.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a formatted subscriber on the global registry.
///
/// Only the first call in a process does anything. A subscriber installed
/// elsewhere beforehand wins; the library crates only emit events and never
/// install one themselves.
pub fn init_tracing() {
    INSTALL.call_once(|| {
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let _ = tracing_subscriber::registry()
            .with(layer)
            .with(env_filter())
            .try_init();
    });
}
