//! Tracing subscriber setup for the binaries and tests.
//!
//! `RUST_LOG` wins when set, e.g. `RUST_LOG=estimate_schedule=debug`.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global fmt subscriber, writing to stderr so stdout stays clean
/// for command output. `default_directive` applies when `RUST_LOG` is unset.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Verbose subscriber for tests; safe to call from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
