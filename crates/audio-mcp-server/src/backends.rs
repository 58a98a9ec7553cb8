//! Start-up construction of the speech engine and mixer.
//!
//! Either backend may be missing on the host. A failed backend is reported
//! and left out of the [`AudioController`]; it is never retried.

use std::fmt;

use audio_mcp_config::Config;
use audio_mcp_playback::{
    AudioController, BackendError, EspeakEngine, Mixer, PlayerMixer, SpeechEngine,
};

use crate::health::HealthReporter;

/// The audio backends the server owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Text-to-speech engine.
    Speech,
    /// File playback mixer.
    Mixer,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Speech => "speech",
            Self::Mixer => "mixer",
        };
        formatter.write_str(label)
    }
}

/// Creates backend instances from configuration.
pub trait BackendProvider {
    /// Creates the speech engine.
    ///
    /// # Errors
    ///
    /// Returns an error when no usable engine is available.
    fn speech_engine(&self, config: &Config) -> Result<Box<dyn SpeechEngine>, BackendError>;

    /// Creates the mixer.
    ///
    /// # Errors
    ///
    /// Returns an error when no usable player is available.
    fn mixer(&self, config: &Config) -> Result<Box<dyn Mixer>, BackendError>;
}

/// Provider that drives the host's command-line audio programs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBackendProvider;

impl BackendProvider for SystemBackendProvider {
    fn speech_engine(&self, config: &Config) -> Result<Box<dyn SpeechEngine>, BackendError> {
        let configured = config.speech_program().map(|path| path.as_std_path());
        let engine = EspeakEngine::locate(configured)?;
        Ok(Box::new(engine))
    }

    fn mixer(&self, config: &Config) -> Result<Box<dyn Mixer>, BackendError> {
        let configured = config.player_program().map(|path| path.as_std_path());
        let mixer = PlayerMixer::locate(configured)?;
        Ok(Box::new(mixer))
    }
}

/// Builds the audio controller, recording unavailable backends.
///
/// The speech engine receives the configured start-up rate and volume.
pub fn initialise_audio(
    provider: &dyn BackendProvider,
    config: &Config,
    reporter: &dyn HealthReporter,
) -> AudioController {
    let speech = match provider.speech_engine(config) {
        Ok(mut engine) => {
            engine.set_rate(config.speech_rate());
            engine.set_volume(config.speech_volume());
            reporter.backend_ready(BackendKind::Speech);
            Some(engine)
        }
        Err(error) => {
            reporter.backend_unavailable(BackendKind::Speech, &error);
            None
        }
    };

    let mixer = match provider.mixer(config) {
        Ok(mixer) => {
            reporter.backend_ready(BackendKind::Mixer);
            Some(mixer)
        }
        Err(error) => {
            reporter.backend_unavailable(BackendKind::Mixer, &error);
            None
        }
    };

    AudioController::new(speech, mixer)
}
