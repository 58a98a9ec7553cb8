//! Tool and parameter descriptors published through `tools/list`.

use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Names of the tools the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// Speak text through the speech engine.
    SpeakText,
    /// Start background playback of an audio file.
    PlayAudioFile,
    /// Halt playback and speech.
    StopAudio,
    /// Report backend readiness and playback state.
    GetAudioStatus,
}

impl ToolName {
    /// Every tool, in discovery order.
    pub const ALL: [Self; 4] = [
        Self::SpeakText,
        Self::PlayAudioFile,
        Self::StopAudio,
        Self::GetAudioStatus,
    ];

    /// Wire name of the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpeakText => "speak_text",
            Self::PlayAudioFile => "play_audio_file",
            Self::StopAudio => "stop_audio",
            Self::GetAudioStatus => "get_audio_status",
        }
    }

    /// Looks a tool up by its exact wire name.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// JSON kind a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A JSON string.
    String,
    /// A JSON number without a fractional part.
    Integer,
    /// Any JSON number.
    Number,
}

impl ParamKind {
    /// JSON Schema type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Advisory numeric bound published in the schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Integer bound.
    Integer(i64),
    /// Floating-point bound.
    Number(f64),
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Integer(value) => serializer.serialize_i64(value),
            Self::Number(value) => serializer.serialize_f64(value),
        }
    }
}

/// One declared tool parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Argument key.
    pub name: &'static str,
    /// Accepted JSON kind.
    pub kind: ParamKind,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether the argument must be present and non-empty.
    pub required: bool,
    /// Advisory lower bound.
    pub minimum: Option<Bound>,
    /// Advisory upper bound.
    pub maximum: Option<Bound>,
}

impl ParamSpec {
    const fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            minimum: None,
            maximum: None,
        }
    }

    pub(crate) const fn required_string(name: &'static str, description: &'static str) -> Self {
        let mut spec = Self::new(name, ParamKind::String, description);
        spec.required = true;
        spec
    }

    pub(crate) const fn integer(
        name: &'static str,
        description: &'static str,
        range: (i64, i64),
    ) -> Self {
        let mut spec = Self::new(name, ParamKind::Integer, description);
        spec.minimum = Some(Bound::Integer(range.0));
        spec.maximum = Some(Bound::Integer(range.1));
        spec
    }

    pub(crate) const fn number(
        name: &'static str,
        description: &'static str,
        range: (f64, f64),
    ) -> Self {
        let mut spec = Self::new(name, ParamKind::Number, description);
        spec.minimum = Some(Bound::Number(range.0));
        spec.maximum = Some(Bound::Number(range.1));
        spec
    }
}

impl Serialize for ParamSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = 2 + usize::from(self.minimum.is_some()) + usize::from(self.maximum.is_some());
        let mut state = serializer.serialize_struct("ParamSpec", fields)?;
        state.serialize_field("type", self.kind.as_str())?;
        state.serialize_field("description", self.description)?;
        if let Some(minimum) = &self.minimum {
            state.serialize_field("minimum", minimum)?;
        }
        if let Some(maximum) = &self.maximum {
            state.serialize_field("maximum", maximum)?;
        }
        state.end()
    }
}

/// Description of one tool, serialised as an MCP tool entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: ToolName,
    /// Human-readable description.
    pub description: &'static str,
    /// Parameters in declaration order.
    pub params: Vec<ParamSpec>,
}

impl ToolDefinition {
    /// Names of the required parameters, in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name)
    }
}

struct Properties<'a>(&'a [ParamSpec]);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for param in self.0 {
            map.serialize_entry(param.name, param)?;
        }
        map.end()
    }
}

struct InputSchema<'a>(&'a ToolDefinition);

impl Serialize for InputSchema<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let required: Vec<&str> = self.0.required().collect();
        let mut state = serializer.serialize_struct("InputSchema", 3)?;
        state.serialize_field("type", "object")?;
        state.serialize_field("properties", &Properties(&self.0.params))?;
        state.serialize_field("required", &required)?;
        state.end()
    }
}

impl Serialize for ToolDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ToolDefinition", 3)?;
        state.serialize_field("name", self.name.as_str())?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("inputSchema", &InputSchema(self))?;
        state.end()
    }
}
