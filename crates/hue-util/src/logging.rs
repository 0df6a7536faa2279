//! Tracing initialization shared by every pass crate and the driver.
//!
//! Each Hue crate logs through `tracing` rather than `println!`/`eprintln!`;
//! this module is the one place that turns those events into output, so the
//! driver controls verbosity (`HUE_LOG`) without every crate depending on
//! `tracing-subscriber` directly.

use tracing_subscriber::EnvFilter;

/// Initialize a process-wide `tracing` subscriber using `HUE_LOG`
/// (falling back to `info`) as the filter directive.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_default() {
    init_with_env_var("HUE_LOG");
}

/// Same as [`init_default`] but reads the filter from a caller-chosen
/// environment variable. Used by tests that want isolated log scopes.
pub fn init_with_env_var(env_var: &str) {
    let filter = EnvFilter::try_from_env(env_var).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
