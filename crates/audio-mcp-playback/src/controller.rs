//! The single owner of the process's audio output.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::backend::{Mixer, SpeechEngine};
use crate::error::AudioError;

const CONTROLLER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::controller");

/// Number of characters of spoken text echoed back in the success message.
pub const PREVIEW_CHARS: usize = 50;

/// Snapshot of backend readiness and playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioStatus {
    /// Whether the speech engine initialised at start-up.
    pub tts_available: bool,
    /// Whether the mixer initialised at start-up.
    pub mixer_available: bool,
    /// Whether the mixer is playing a track right now.
    pub music_playing: bool,
}

/// Drives the speech engine and mixer on behalf of every caller.
///
/// A backend that failed to initialise is held as `None` for the rest of the
/// process lifetime. Operations that need it fail with the matching
/// `*Unavailable` error while [`AudioController::status`] keeps reporting the
/// truth.
pub struct AudioController {
    speech: Option<Box<dyn SpeechEngine>>,
    mixer: Option<Box<dyn Mixer>>,
}

impl fmt::Debug for AudioController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioController")
            .field("speech", &self.speech.is_some())
            .field("mixer", &self.mixer.is_some())
            .finish()
    }
}

impl AudioController {
    /// Creates a controller from already boxed backends.
    #[must_use]
    pub fn new(speech: Option<Box<dyn SpeechEngine>>, mixer: Option<Box<dyn Mixer>>) -> Self {
        Self { speech, mixer }
    }

    /// Creates a controller from concrete backend values.
    #[must_use]
    pub fn from_backends<S, M>(speech: Option<S>, mixer: Option<M>) -> Self
    where
        S: SpeechEngine + 'static,
        M: Mixer + 'static,
    {
        Self::new(
            speech.map(|engine| Box::new(engine) as Box<dyn SpeechEngine>),
            mixer.map(|mixer| Box::new(mixer) as Box<dyn Mixer>),
        )
    }

    /// Speaks `text`, blocking until the utterance completes.
    ///
    /// `rate` is handed to the engine unchanged; `volume` is clamped to
    /// `[0.0, 1.0]`. Both persist for later utterances.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::EngineUnavailable`] when no engine is present and
    /// [`AudioError::SpeechFailed`] when synthesis fails.
    pub fn speak(
        &mut self,
        text: &str,
        rate: Option<i64>,
        volume: Option<f64>,
    ) -> Result<String, AudioError> {
        let engine = self.speech.as_mut().ok_or(AudioError::EngineUnavailable)?;

        if let Some(rate) = rate {
            engine.set_rate(rate);
        }
        if let Some(volume) = volume {
            engine.set_volume(clamp_volume(volume));
        }

        debug!(target: CONTROLLER_TARGET, chars = text.chars().count(), ?rate, ?volume, "speaking");
        engine
            .say(text)
            .map_err(|source| AudioError::SpeechFailed { source })?;

        Ok(format!("Successfully spoke text: '{}'", preview(text)))
    }

    /// Starts playing `path` in the background.
    ///
    /// Anything already playing is replaced. The call returns as soon as
    /// playback has started.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::MixerUnavailable`] when no mixer is present,
    /// [`AudioError::FileNotFound`] when `path` is not an existing file, and
    /// [`AudioError::PlaybackFailed`] when the mixer cannot start the track.
    pub fn play_file(&mut self, path: &Path, volume: Option<f64>) -> Result<String, AudioError> {
        let mixer = self.mixer.as_mut().ok_or(AudioError::MixerUnavailable)?;

        if !path.is_file() {
            return Err(AudioError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        mixer
            .load(path)
            .map_err(|source| AudioError::PlaybackFailed { source })?;
        if let Some(volume) = volume {
            mixer.set_volume(clamp_volume(volume));
        }
        mixer
            .play()
            .map_err(|source| AudioError::PlaybackFailed { source })?;

        info!(target: CONTROLLER_TARGET, track = %path.display(), "playback started");
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        Ok(format!("Successfully started playing: {name}"))
    }

    /// Halts playback and any speech in progress.
    ///
    /// Stopping while idle, or with backends missing, succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::StopFailed`] when a backend cannot be halted.
    pub fn stop(&mut self) -> Result<String, AudioError> {
        if let Some(mixer) = self.mixer.as_mut() {
            mixer
                .stop()
                .map_err(|source| AudioError::StopFailed { source })?;
        }
        if let Some(engine) = self.speech.as_mut() {
            engine
                .stop()
                .map_err(|source| AudioError::StopFailed { source })?;
        }

        debug!(target: CONTROLLER_TARGET, "audio stopped");
        Ok(String::from("Audio playback stopped"))
    }

    /// Reports backend readiness and whether a track is playing.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::StatusFailed`] when the mixer cannot be polled.
    pub fn status(&mut self) -> Result<AudioStatus, AudioError> {
        let music_playing = match self.mixer.as_mut() {
            Some(mixer) => mixer
                .is_busy()
                .map_err(|source| AudioError::StatusFailed { source })?,
            None => false,
        };

        Ok(AudioStatus {
            tts_available: self.speech.is_some(),
            mixer_available: self.mixer.is_some(),
            music_playing,
        })
    }
}

fn clamp_volume(volume: f64) -> f64 {
    volume.clamp(0.0, 1.0)
}

fn preview(text: &str) -> String {
    let mut shown: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().nth(PREVIEW_CHARS).is_some() {
        shown.push_str("...");
    }
    shown
}
