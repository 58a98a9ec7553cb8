//! Error types for request dispatch failures.
//!
//! Every variant is reported to the caller as a JSON-RPC `Internal error`
//! envelope whose `data` is the display text. Tool failures never surface
//! here; they are reported inside a successful tool result instead.

use thiserror::Error;

use crate::protocol::RequestId;

/// Failures that prevent a request line from producing a normal result.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The line is empty or is not valid JSON.
    ///
    /// Displays the parser diagnostic unchanged.
    #[error("{message}")]
    Malformed {
        /// Parser diagnostic.
        message: String,
        /// Underlying parser error, when there is one.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The line is valid JSON but not an object.
    #[error("request must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON kind that was received.
        found: &'static str,
    },

    /// The object does not match the envelope shape.
    #[error("invalid request envelope: {source}")]
    InvalidEnvelope {
        /// Id recovered from the object, if any.
        id: RequestId,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// A result value could not be built.
    #[error("failed to build response: {source}")]
    BuildResult {
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },
}

impl DispatchError {
    /// Creates a malformed-request error from a parser error.
    #[must_use]
    pub fn from_json_error(source: serde_json::Error) -> Self {
        Self::Malformed {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates a malformed-request error with a custom message.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            source: None,
        }
    }

    /// Id to answer with when the request itself could not be understood.
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::InvalidEnvelope { id, .. } => id.clone(),
            Self::Malformed { .. } | Self::NotAnObject { .. } | Self::BuildResult { .. } => {
                RequestId::sentinel()
            }
        }
    }
}
