//! Model Context Protocol server exposing audio tools over stdio.
//!
//! The server reads line-delimited JSON-RPC 2.0 requests from stdin and writes
//! one response line per request to stdout. Four tools are offered:
//! `speak_text`, `play_audio_file`, `stop_audio` and `get_audio_status`. They
//! drive a single [`audio_mcp_playback::AudioController`] owned by the
//! [`ServerContext`] for the life of the process.
//!
//! Start-up follows a fixed sequence: load configuration, initialise
//! telemetry on stderr, then construct the speech engine and mixer. Missing
//! audio backends do not stop the server; the tools that need them report
//! the failure on each call instead.
//!
//! Setting `interactive` in the configuration swaps the JSON-RPC loop for a
//! small console (see [`run_console`]) that writes to stderr.

mod backends;
mod bootstrap;
mod console;
mod context;
pub mod dispatch;
mod health;
mod process;
pub mod protocol;
pub mod registry;
mod telemetry;
pub mod transport;

pub use backends::{BackendKind, BackendProvider, SystemBackendProvider, initialise_audio};
pub use bootstrap::{
    BootstrapError, ConfigLoader, Server, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use console::{ConsoleCommand, ConsoleError, run_console};
pub use context::ServerContext;
pub use health::{HealthReporter, StructuredHealthReporter};
pub use process::{RunError, run};
pub use telemetry::{TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
