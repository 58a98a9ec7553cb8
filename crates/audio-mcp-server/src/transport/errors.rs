//! Transport failures.

use std::io;

use thiserror::Error;

/// Failures that end a transport session abnormally.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A response could not be serialised.
    #[error("failed to serialise response: {source}")]
    Serialize {
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },
    /// Writing or flushing the output failed.
    #[error("failed to write response: {source}")]
    Write {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}
