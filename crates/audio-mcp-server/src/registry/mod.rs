//! Catalogue of the tools the server exposes.
//!
//! The registry is built once at start-up and never mutated. It serves two
//! purposes: publishing tool definitions for `tools/list`, and turning the
//! untyped `tools/call` parameters into a [`ToolCall`].
//!
//! Validation checks presence and JSON kind only. The numeric bounds in the
//! published schema are advisory; out-of-range values are handed to the audio
//! controller, which clamps volume and passes rate through. An integer
//! parameter accepts any number without a fractional part, so `150.0` is a
//! valid rate; `1.5` is rejected.

mod arguments;
mod call;
mod definition;
mod error;

#[cfg(test)]
mod tests;

use serde_json::Value;

use self::arguments::ArgumentReader;
pub(crate) use self::arguments::json_kind;
pub use self::call::{PlayFileArgs, SpeakArgs, ToolCall};
pub use self::definition::{Bound, ParamKind, ParamSpec, ToolDefinition, ToolName};
pub use self::error::ValidationError;

/// Immutable lookup table of tool definitions.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Builds the registry of audio tools.
    #[must_use]
    pub fn new() -> Self {
        let tools = ToolName::ALL.into_iter().map(definition_for).collect();
        Self { tools }
    }

    /// Tool definitions in stable discovery order.
    #[must_use]
    pub fn describe(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Looks up the definition of `name`.
    #[must_use]
    pub fn definition(&self, name: ToolName) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Validates a named call and its argument object.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the tool is unknown or an argument
    /// is missing or of the wrong kind.
    pub fn validate(
        &self,
        name: &str,
        arguments: Option<&Value>,
    ) -> Result<ToolCall, ValidationError> {
        let tool = ToolName::from_wire(name)
            .filter(|tool| self.definition(*tool).is_some())
            .ok_or_else(|| ValidationError::UnknownTool {
                name: name.to_owned(),
            })?;
        let reader = ArgumentReader::new(tool, arguments)?;

        match tool {
            ToolName::SpeakText => Ok(ToolCall::Speak(SpeakArgs {
                text: reader.required_string("text")?,
                rate: reader.optional_integer("rate")?,
                volume: reader.optional_number("volume")?,
            })),
            ToolName::PlayAudioFile => Ok(ToolCall::PlayFile(PlayFileArgs {
                file_path: reader.required_string("file_path")?.into(),
                volume: reader.optional_number("volume")?,
            })),
            ToolName::StopAudio => Ok(ToolCall::Stop),
            ToolName::GetAudioStatus => Ok(ToolCall::Status),
        }
    }

    /// Validates the raw `params` of a `tools/call` request.
    ///
    /// `params` must be an object (or absent) with a string `name` and an
    /// optional `arguments` object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidParams`] for non-object params,
    /// [`ValidationError::MissingToolName`] when `name` is absent or `null`,
    /// and otherwise any error from [`ToolRegistry::validate`].
    pub fn validate_params(&self, params: Option<&Value>) -> Result<ToolCall, ValidationError> {
        let params = match params {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                return Err(ValidationError::InvalidParams {
                    found: json_kind(other),
                });
            }
        };

        let name = match params.and_then(|map| map.get("name")) {
            None | Some(Value::Null) => return Err(ValidationError::MissingToolName),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        };
        self.validate(&name, params.and_then(|map| map.get("arguments")))
    }
}

fn definition_for(name: ToolName) -> ToolDefinition {
    match name {
        ToolName::SpeakText => ToolDefinition {
            name,
            description: "Convert text to speech and play it through the system audio",
            params: vec![
                ParamSpec::required_string("text", "The text to convert to speech and play"),
                ParamSpec::integer(
                    "rate",
                    "Speech rate (words per minute, default: 150)",
                    (50, 300),
                ),
                ParamSpec::number(
                    "volume",
                    "Volume level (0.0 to 1.0, default: 0.8)",
                    (0.0, 1.0),
                ),
            ],
        },
        ToolName::PlayAudioFile => ToolDefinition {
            name,
            description: "Play an audio file through the system audio",
            params: vec![
                ParamSpec::required_string("file_path", "Path to the audio file to play"),
                ParamSpec::number("volume", "Volume level (0.0 to 1.0)", (0.0, 1.0)),
            ],
        },
        ToolName::StopAudio => ToolDefinition {
            name,
            description: "Stop current audio playback",
            params: Vec::new(),
        },
        ToolName::GetAudioStatus => ToolDefinition {
            name,
            description: "Get current audio system status and playback information",
            params: Vec::new(),
        },
    }
}
