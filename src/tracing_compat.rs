//! Logging shim over `tracing`.
//!
//! With the `tracing-integration` feature (default) this re-exports the
//! `tracing` event macros. Without it the same macro names expand to nothing,
//! so call sites never need their own `cfg` guards.

#[cfg(feature = "tracing-integration")]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {debug, trace, warn};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop::{debug, trace, warn};
