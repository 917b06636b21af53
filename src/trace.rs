//! Zero-cost tracing helpers.
//!
//! With the `tracing` feature enabled these macros forward to the
//! `tracing` crate; without it (the default) they compile to no-ops and
//! the instrumented code carries no runtime overhead.
//!
//! ```bash
//! # Normal build - no tracing overhead
//! cargo build --release
//!
//! # Run tests with construction events visible
//! RUST_LOG=sfxi=trace cargo test --features tracing
//! ```

#![allow(unused_macros, unused_imports)]

/// Trace-level events (per-operation detail).
#[cfg(feature = "tracing")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Debug-level events (per-call summaries).
#[cfg(feature = "tracing")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
pub(crate) use trace_log;
