//! Line-delimited stdio transport.
//!
//! The loop reads one `\n`-terminated line at a time (a final unterminated
//! line is accepted), hands it to a [`LineHandler`], and writes any response
//! followed by a newline, flushing after every line. Only stdout carries
//! protocol traffic; diagnostics go through `tracing` to stderr.

mod errors;
mod writer;

use std::io::{BufRead, Write};

use tracing::{debug, error, info};

pub use self::errors::TransportError;
pub use self::writer::ResponseWriter;
use crate::dispatch::trim_trailing_whitespace;
use crate::protocol::Response;

const TRANSPORT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");

/// Consumes request lines and produces at most one response per line.
pub trait LineHandler {
    /// Handles one line with its delimiter and trailing whitespace removed.
    fn handle_line(&mut self, line: &[u8]) -> Option<Response>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input stream was closed.
    #[default]
    EndOfInput,
    /// Reading from the input stream failed.
    ReadFailed,
}

/// Counters describing a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines read from the input, including rejected ones.
    pub lines_read: u64,
    /// Responses written to the output.
    pub responses_written: u64,
    /// Why the loop stopped.
    pub end: SessionEnd,
}

/// Runs the request loop until the input ends or cannot be read.
///
/// A read failure is logged and ends the session normally.
///
/// # Errors
///
/// Returns [`TransportError`] when a response cannot be written or flushed.
pub fn serve<R, W, H>(
    reader: &mut R,
    writer: W,
    handler: &mut H,
) -> Result<SessionSummary, TransportError>
where
    R: BufRead,
    W: Write,
    H: LineHandler,
{
    let mut writer = ResponseWriter::new(writer);
    let mut summary = SessionSummary::default();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => {
                info!(
                    target: TRANSPORT_TARGET,
                    lines = summary.lines_read,
                    responses = summary.responses_written,
                    "input closed"
                );
                return Ok(summary);
            }
            Ok(bytes) => {
                debug!(target: TRANSPORT_TARGET, bytes, "read request line");
            }
            Err(source) => {
                error!(target: TRANSPORT_TARGET, error = %source, "failed to read input");
                summary.end = SessionEnd::ReadFailed;
                return Ok(summary);
            }
        }

        summary.lines_read += 1;
        if let Some(response) = handler.handle_line(trim_trailing_whitespace(&buffer)) {
            writer.write_response(&response)?;
            summary.responses_written += 1;
        }
    }
}
