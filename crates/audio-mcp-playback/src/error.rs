//! Error types for audio operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a speech engine or mixer implementation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No candidate program was found on `PATH`.
    #[error("no {role} program found on PATH (tried {candidates})")]
    NotFound {
        /// Human-readable backend role, for example `speech`.
        role: &'static str,
        /// Comma-separated list of program names that were searched for.
        candidates: String,
    },
    /// An explicitly configured program does not exist.
    #[error("configured {role} program '{}' does not exist", path.display())]
    MissingProgram {
        /// Human-readable backend role.
        role: &'static str,
        /// Configured program path.
        path: PathBuf,
    },
    /// The program could not be launched.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying process error.
        #[source]
        source: io::Error,
    },
    /// The program ran but reported failure.
    #[error("'{program}' failed with {status}: {stderr}")]
    Exited {
        /// Program that failed.
        program: String,
        /// Rendered exit status.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },
    /// A running program could not be signalled or reaped.
    #[error("failed to halt '{program}': {source}")]
    Signal {
        /// Program being halted.
        program: String,
        /// Underlying process error.
        #[source]
        source: io::Error,
    },
    /// The state of a running program could not be polled.
    #[error("failed to poll '{program}': {source}")]
    Poll {
        /// Program being polled.
        program: String,
        /// Underlying process error.
        #[source]
        source: io::Error,
    },
    /// `play` was requested before any track was loaded.
    #[error("no track loaded")]
    NothingLoaded,
}

/// Failures surfaced by [`crate::AudioController`] operations.
///
/// The display text of each variant is the diagnostic shown to remote
/// callers, so the wording is part of the wire contract.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The speech engine failed to initialise at start-up.
    #[error("TTS engine not available")]
    EngineUnavailable,
    /// The mixer failed to initialise at start-up.
    #[error("Audio system not initialized")]
    MixerUnavailable,
    /// The requested track does not exist.
    #[error("Audio file not found: {}", path.display())]
    FileNotFound {
        /// Path supplied by the caller.
        path: PathBuf,
    },
    /// The speech engine failed while speaking.
    #[error("Failed to speak text: {source}")]
    SpeechFailed {
        /// Underlying engine failure.
        #[source]
        source: BackendError,
    },
    /// The mixer failed to load or start a track.
    #[error("Failed to play audio file: {source}")]
    PlaybackFailed {
        /// Underlying mixer failure.
        #[source]
        source: BackendError,
    },
    /// Halting playback or speech failed.
    #[error("Failed to stop audio: {source}")]
    StopFailed {
        /// Underlying backend failure.
        #[source]
        source: BackendError,
    },
    /// Polling the mixer failed.
    #[error("Failed to get audio status: {source}")]
    StatusFailed {
        /// Underlying mixer failure.
        #[source]
        source: BackendError,
    },
}
