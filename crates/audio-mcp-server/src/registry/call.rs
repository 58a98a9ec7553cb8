//! Validated, typed tool invocations.

use camino::Utf8PathBuf;

use super::ToolName;

/// Arguments of `speak_text`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakArgs {
    /// Text to speak. Never empty.
    pub text: String,
    /// Speech rate, passed to the engine as given.
    pub rate: Option<i64>,
    /// Requested volume before clamping.
    pub volume: Option<f64>,
}

/// Arguments of `play_audio_file`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayFileArgs {
    /// Track to play. Never empty.
    pub file_path: Utf8PathBuf,
    /// Requested volume before clamping.
    pub volume: Option<f64>,
}

/// A tool call whose arguments passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    /// `speak_text`.
    Speak(SpeakArgs),
    /// `play_audio_file`.
    PlayFile(PlayFileArgs),
    /// `stop_audio`.
    Stop,
    /// `get_audio_status`.
    Status,
}

impl ToolCall {
    /// Name of the invoked tool.
    #[must_use]
    pub const fn name(&self) -> ToolName {
        match self {
            Self::Speak(_) => ToolName::SpeakText,
            Self::PlayFile(_) => ToolName::PlayAudioFile,
            Self::Stop => ToolName::StopAudio,
            Self::Status => ToolName::GetAudioStatus,
        }
    }
}
