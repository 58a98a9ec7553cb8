//! Response framing.

use std::io::Write;

use super::errors::TransportError;
use crate::protocol::Response;

/// Writes responses as newline-terminated JSON lines.
pub struct ResponseWriter<W> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    /// Wraps an output stream.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one response line and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation, writing or flushing fails.
    pub fn write_response(&mut self, response: &Response) -> Result<(), TransportError> {
        let payload =
            serde_json::to_vec(response).map_err(|source| TransportError::Serialize { source })?;
        self.writer
            .write_all(&payload)
            .and_then(|()| self.writer.write_all(b"\n"))
            .and_then(|()| self.writer.flush())
            .map_err(|source| TransportError::Write { source })
    }

    /// Returns the wrapped stream.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
