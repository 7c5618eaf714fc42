//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test file.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install a fmt subscriber once for the whole test binary.
///
/// Run with `RUST_LOG`-style verbosity via `--nocapture` to see the
/// store's debug/trace events while a test executes.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}
