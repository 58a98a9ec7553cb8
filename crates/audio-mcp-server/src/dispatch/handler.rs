//! Per-line request handling.

use audio_mcp_playback::AudioController;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, error, info, warn};

use super::errors::DispatchError;
use super::request;
use super::router::{DISPATCH_TARGET, Method};
use super::tools::call_tool;
use crate::protocol::{PROTOCOL_VERSION, RequestId, Response, ServerInfo};
use crate::registry::{ToolDefinition, ToolRegistry};
use crate::transport::LineHandler;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitializeResult<'a> {
    protocol_version: &'static str,
    capabilities: Capabilities,
    server_info: &'a ServerInfo,
}

#[derive(Serialize)]
struct Capabilities {
    tools: ToolsCapability,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolsCapability {
    list_changed: bool,
}

#[derive(Serialize)]
struct ToolsListResult<'a> {
    tools: &'a [ToolDefinition],
}

/// Turns request lines into responses.
///
/// The dispatcher keeps no state between lines; everything it needs is
/// borrowed from the [`crate::ServerContext`] it was created from.
pub struct Dispatcher<'a> {
    registry: &'a ToolRegistry,
    audio: &'a mut AudioController,
    info: &'a ServerInfo,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over borrowed server state.
    #[must_use]
    pub const fn new(
        registry: &'a ToolRegistry,
        audio: &'a mut AudioController,
        info: &'a ServerInfo,
    ) -> Self {
        Self {
            registry,
            audio,
            info,
        }
    }

    /// Handles one request line.
    ///
    /// Returns `None` for notifications and exactly one response otherwise.
    pub fn handle_line(&mut self, line: &[u8]) -> Option<Response> {
        let envelope = match request::parse(line) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(target: DISPATCH_TARGET, %error, "rejected request line");
                return Some(Response::internal_error(
                    error.request_id(),
                    error.to_string(),
                ));
            }
        };

        if envelope.is_notification() {
            info!(
                target: DISPATCH_TARGET,
                method = envelope.method.as_deref().unwrap_or_default(),
                "received notification"
            );
            return None;
        }

        let id = RequestId::resolve(envelope.id);
        let method_name = envelope.method;
        let outcome = match method_name.as_deref().and_then(Method::from_wire) {
            Some(method) => {
                debug!(target: DISPATCH_TARGET, method = method.as_str(), "dispatching request");
                self.route(method, envelope.params.as_ref())
            }
            None => {
                let shown = method_name.as_deref().unwrap_or("null");
                warn!(target: DISPATCH_TARGET, method = shown, "unknown method");
                Ok(json!({
                    "success": false,
                    "error": format!("Unknown method: {shown}"),
                }))
            }
        };

        Some(match outcome {
            Ok(result) => Response::success(id, result),
            Err(error) => {
                error!(target: DISPATCH_TARGET, %error, "request failed");
                Response::internal_error(id, error.to_string())
            }
        })
    }

    fn route(&mut self, method: Method, params: Option<&Value>) -> Result<Value, DispatchError> {
        match method {
            Method::Initialize => to_result(&InitializeResult {
                protocol_version: PROTOCOL_VERSION,
                capabilities: Capabilities {
                    tools: ToolsCapability {
                        list_changed: false,
                    },
                },
                server_info: self.info,
            }),
            Method::ToolsList => to_result(&ToolsListResult {
                tools: self.registry.describe(),
            }),
            Method::ToolsCall => to_result(&call_tool(self.registry, self.audio, params)),
            Method::ResourcesList => Ok(json!({ "resources": [] })),
            Method::PromptsList => Ok(json!({ "prompts": [] })),
        }
    }
}

impl LineHandler for Dispatcher<'_> {
    fn handle_line(&mut self, line: &[u8]) -> Option<Response> {
        Dispatcher::handle_line(self, line)
    }
}

fn to_result(value: &impl Serialize) -> Result<Value, DispatchError> {
    serde_json::to_value(value).map_err(|source| DispatchError::BuildResult { source })
}
