//! JSON-RPC envelope types exchanged over the stdio transport.
//!
//! Inbound envelopes are parsed loosely: every field is optional and `params`
//! and `id` stay as untyped JSON until a handler interprets them. Outbound
//! responses always carry a concrete `id`, using `0` when the request had none.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC version tag written on every response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Model Context Protocol revision announced by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC code for failures that prevented a request from being handled.
pub const INTERNAL_ERROR: i64 = -32603;

/// Method prefix marking fire-and-forget notifications.
pub const NOTIFICATION_PREFIX: &str = "notifications/";

/// A request or notification as received from the caller.
///
/// `jsonrpc` is accepted but not checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    /// Protocol tag sent by the caller.
    #[serde(default)]
    pub jsonrpc: Option<Value>,
    /// Slash-namespaced method name.
    #[serde(default)]
    pub method: Option<String>,
    /// Method parameters, interpreted by the handler.
    #[serde(default)]
    pub params: Option<Value>,
    /// Correlation id. `None` covers both an absent and a `null` id.
    #[serde(default)]
    pub id: Option<Value>,
}

impl Envelope {
    /// Whether the envelope is a notification that must not be answered.
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.method
            .as_deref()
            .is_some_and(|method| method.starts_with(NOTIFICATION_PREFIX))
    }
}

/// Correlation id echoed on a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestId(Value);

impl RequestId {
    /// Id used when the request carried none.
    #[must_use]
    pub fn sentinel() -> Self {
        Self(Value::from(0))
    }

    /// Resolves an inbound id, substituting the sentinel for absent or `null`.
    #[must_use]
    pub fn resolve(raw: Option<Value>) -> Self {
        match raw {
            None | Some(Value::Null) => Self::sentinel(),
            Some(value) => Self(value),
        }
    }

    /// The id as JSON.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Error payload of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    /// JSON-RPC error code.
    pub code: i64,
    /// Short, fixed description of the code.
    pub message: String,
    /// Detail text describing this particular failure.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Result(Value),
    Error(ErrorObject),
}

/// One outbound response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    jsonrpc: &'static str,
    id: RequestId,
    #[serde(flatten)]
    outcome: Outcome,
}

impl Response {
    /// Builds a successful response carrying `result`.
    #[must_use]
    pub const fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            outcome: Outcome::Result(result),
        }
    }

    /// Builds an `Internal error` response whose `data` describes the fault.
    #[must_use]
    pub fn internal_error(id: RequestId, data: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            outcome: Outcome::Error(ErrorObject {
                code: INTERNAL_ERROR,
                message: String::from("Internal error"),
                data: data.into(),
            }),
        }
    }

    /// Correlation id of the response.
    #[must_use]
    pub const fn id(&self) -> &RequestId {
        &self.id
    }

    /// Result payload, if the response is a success.
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Result(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    /// Error payload, if the response is a failure.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorObject> {
        match &self.outcome {
            Outcome::Result(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }
}

/// Name and version announced to the caller during `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl ServerInfo {
    /// Creates server info from explicit values.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
