//! Tracing/logging setup shared by binaries, tests and benches.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to whoever owns the process.

/// Initialize process-wide tracing with the default configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&LogConfig::default());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat, init_with};
