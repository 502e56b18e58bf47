//! Shared helpers for unit tests: tracing setup and structured assertions.

use tracing_subscriber::EnvFilter;

/// Initializes test logging once per process.
///
/// The filter comes from `TEST_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// Output goes through the test writer so it is captured per test.
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
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(test = $name, "=== TEST START ===");
    };
}

/// Marks the end of a test in the log.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "=== TEST COMPLETE ===");
    };
}

/// Assertion with logging for better test output.
#[macro_export]
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

#[cfg(test)]
mod tests {
    use super::filter_directive;

    #[test]
    fn test_log_level_takes_precedence_over_rust_log() {
        let directive = filter_directive(Some("trace".into()), Some("warn".into()));
        assert_eq!(directive, "trace");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        assert_eq!(filter_directive(None, Some("zero_or_one=debug".into())), "zero_or_one=debug");
        assert_eq!(filter_directive(Some("  ".into()), Some("warn".into())), "warn");
    }

    #[test]
    fn info_when_neither_is_set() {
        assert_eq!(filter_directive(None, None), "info");
        assert_eq!(filter_directive(None, Some(String::new())), "info");
    }
}
