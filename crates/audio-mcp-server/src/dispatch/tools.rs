//! Tool execution and MCP tool result rendering.

use std::fmt;

use audio_mcp_playback::{AudioController, AudioStatus};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::router::DISPATCH_TARGET;
use crate::registry::{ToolCall, ToolRegistry};

/// One content block of a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text.
    Text {
        /// Text payload.
        text: String,
    },
}

/// Outcome of a tool call in MCP result form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    content: Vec<Content>,
    #[serde(rename = "isError")]
    is_error: bool,
}

impl ToolResult {
    /// A successful result with a single text block.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// A failed result whose text is the diagnostic prefixed with `Error: `.
    #[must_use]
    pub fn failure(diagnostic: &impl fmt::Display) -> Self {
        Self {
            content: vec![Content::Text {
                text: format!("Error: {diagnostic}"),
            }],
            is_error: true,
        }
    }

    /// Whether the call failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.is_error
    }

    /// Text of the first content block.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            Content::Text { text } => text.as_str(),
        })
    }
}

/// Validates raw `tools/call` params and runs the resulting call.
///
/// Validation failures become failed tool results; they never abort the
/// request.
pub fn call_tool(
    registry: &ToolRegistry,
    audio: &mut AudioController,
    params: Option<&Value>,
) -> ToolResult {
    match registry.validate_params(params) {
        Ok(call) => execute(audio, &call),
        Err(error) => {
            warn!(target: DISPATCH_TARGET, %error, "tool call rejected");
            ToolResult::failure(&error)
        }
    }
}

/// Runs a validated call against the audio controller.
pub fn execute(audio: &mut AudioController, call: &ToolCall) -> ToolResult {
    debug!(target: DISPATCH_TARGET, tool = %call.name(), "executing tool");
    let outcome = match call {
        ToolCall::Speak(args) => audio.speak(&args.text, args.rate, args.volume),
        ToolCall::PlayFile(args) => audio.play_file(args.file_path.as_std_path(), args.volume),
        ToolCall::Stop => audio.stop(),
        ToolCall::Status => audio.status().map(|status| render_status(&status)),
    };

    match outcome {
        Ok(message) => ToolResult::success(message),
        Err(error) => {
            warn!(target: DISPATCH_TARGET, tool = %call.name(), %error, "tool failed");
            ToolResult::failure(&error)
        }
    }
}

/// Renders the human-readable status report returned by `get_audio_status`.
#[must_use]
pub fn render_status(status: &AudioStatus) -> String {
    format!(
        "Audio Status:\n- TTS Available: {}\n- Mixer Available: {}\n- Music Playing: {}",
        status.tts_available, status.mixer_available, status.music_playing
    )
}
