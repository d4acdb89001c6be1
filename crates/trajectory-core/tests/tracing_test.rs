//! Filter resolution and subscriber installation.

use std::sync::Mutex;

use trajectory_core::tracing::setup::{env_filter, init_tracing, DEFAULT_DIRECTIVE, LOG_ENV_VAR};

/// Serializes tests that touch the process environment.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_debug_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "debug");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_per_module_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "trajectory_sim::batch=debug,trajectory_sim=warn");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "this_is_garbage=not_a_level=at_all");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_unset_variable_uses_default_directive() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::remove_var(LOG_ENV_VAR);
    assert!(env_filter().to_string().contains(DEFAULT_DIRECTIVE));
}
