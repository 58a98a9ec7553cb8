//! Default values shared by the configuration accessors and the binaries.

use crate::logging::LogFormat;

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Speech rate, in words per minute, applied when the engine starts.
pub const DEFAULT_SPEECH_RATE: i64 = 150;

/// Speech volume applied when the engine starts.
pub const DEFAULT_SPEECH_VOLUME: f64 = 0.8;

/// Default log filter expression used by the binaries.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binaries.
///
/// Diagnostics share a terminal with whoever launched the server, so the
/// human-readable format is the default.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
