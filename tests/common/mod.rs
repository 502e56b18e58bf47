//! Shared helpers for integration tests.

#![allow(dead_code, unused_macros)]

use tracing_subscriber::EnvFilter;

/// Initializes test logging once per process, filtered by `TEST_LOG_LEVEL`
/// or, failing that, `RUST_LOG`.
pub fn init_test_logging() {
    let directive = filter_directive(
        std::env::var("TEST_LOG_LEVEL").ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_test_writer()
        .try_init();
}

/// `TEST_LOG_LEVEL` wins over `RUST_LOG`; blank values are ignored.
pub fn filter_directive(test_level: Option<String>, rust_log: Option<String>) -> String {
    [test_level, rust_log]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

/// Phase tracking macro for structured test logging.
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(test = $name, "=== TEST START ===");
    };
}

/// Marks the end of a test in the log.
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "=== TEST COMPLETE ===");
    };
}

/// Assertion with logging for better test output.
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {
        if !$cond {
            tracing::error!(
                message = $msg,
                expected = ?$expected,
                actual = ?$actual,
                "Assertion failed"
            );
        }
        assert!($cond, "{}: expected {:?}, got {:?}", $msg, $expected, $actual);
    };
}

pub fn init_test(name: &str) {
    init_test_logging();
    test_phase!(name);
}
