//! Process entry point wiring the real collaborators to stdio.

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::backends::SystemBackendProvider;
use crate::bootstrap::{BootstrapError, SystemConfigLoader, bootstrap_with};
use crate::console::ConsoleError;
use crate::health::StructuredHealthReporter;
use crate::transport::TransportError;

const PROCESS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::process");

/// Errors that end the server process with a failure status.
#[derive(Debug, Error)]
pub enum RunError {
    /// Start-up failed.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    /// The JSON-RPC session could not write a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The interactive console could not write its output.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// Boots the server and runs it against the process's standard streams.
///
/// In JSON-RPC mode responses go to stdout. The interactive console writes to
/// stderr so stdout stays clean.
///
/// # Errors
///
/// Returns [`RunError`] when bootstrap fails or output cannot be written.
pub fn run() -> Result<(), RunError> {
    let mut server = bootstrap_with(
        &SystemConfigLoader,
        Arc::new(StructuredHealthReporter::new()),
        &SystemBackendProvider,
    )?;

    let mut input = io::stdin().lock();
    if server.config().interactive() {
        let mut output = io::stderr().lock();
        server.console(&mut input, &mut output)?;
        info!(target: PROCESS_TARGET, "interactive session ended");
        return Ok(());
    }

    let summary = server.serve(&mut input, io::stdout().lock())?;
    info!(
        target: PROCESS_TARGET,
        lines = summary.lines_read,
        responses = summary.responses_written,
        end = ?summary.end,
        "session ended"
    );
    Ok(())
}
