//! Validation failures for tool calls.

use thiserror::Error;

use super::{ParamKind, ToolName};

/// Reasons a `tools/call` request is rejected before reaching the audio
/// controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The requested tool is not registered.
    #[error("Unknown tool '{name}'")]
    UnknownTool {
        /// Name as sent by the caller.
        name: String,
    },
    /// `params.name` is absent or `null`.
    #[error("missing tool name")]
    MissingToolName,
    /// `params` is present but is not an object.
    #[error("tool call parameters must be an object, found {found}")]
    InvalidParams {
        /// JSON kind that was sent.
        found: &'static str,
    },
    /// `params.arguments` is present but is not an object.
    #[error("arguments for '{tool}' must be an object, found {found}")]
    InvalidArguments {
        /// Tool being invoked.
        tool: ToolName,
        /// JSON kind that was sent.
        found: &'static str,
    },
    /// A required argument is absent, `null` or empty.
    #[error("missing required parameter '{parameter}'")]
    MissingParameter {
        /// Tool being invoked.
        tool: ToolName,
        /// Parameter name.
        parameter: &'static str,
    },
    /// An argument has the wrong JSON kind.
    #[error("parameter '{parameter}' must be of type {expected}, found {found}")]
    InvalidParameter {
        /// Tool being invoked.
        tool: ToolName,
        /// Parameter name.
        parameter: &'static str,
        /// Declared kind.
        expected: ParamKind,
        /// Description of what was sent.
        found: &'static str,
    },
}
