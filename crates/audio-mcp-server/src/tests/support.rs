//! Shared doubles for the server test suites.

use std::collections::HashMap;
use std::ffi::OsString;
use std::sync::{Arc, Mutex};

use audio_mcp_config::Config;
use audio_mcp_playback::testing::{CallLog, ScriptedMixer, ScriptedSpeech};
use audio_mcp_playback::{AudioController, BackendError, Mixer, SpeechEngine};
use ortho_config::{OrthoConfig, OrthoError};

use crate::backends::{BackendKind, BackendProvider};
use crate::bootstrap::{BootstrapError, ConfigLoader};
use crate::context::ServerContext;
use crate::health::HealthReporter;

/// Context whose backends record into `log`.
pub fn scripted_context(log: &CallLog) -> ServerContext {
    ServerContext::new(AudioController::from_backends(
        Some(ScriptedSpeech::new(log.clone())),
        Some(ScriptedMixer::new(log.clone())),
    ))
}

/// Loader that resolves configuration from explicit command-line flags.
pub struct ArgsConfigLoader {
    args: Vec<OsString>,
}

impl ArgsConfigLoader {
    /// Uses `flags` as the arguments following the program name.
    pub fn new(flags: &[&str]) -> Self {
        let args = std::iter::once("audio-mcp-server")
            .chain(flags.iter().copied())
            .map(OsString::from)
            .collect();
        Self { args }
    }
}

impl ConfigLoader for ArgsConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load_from_iter(self.args.clone())
    }
}

/// Records health events for assertions.
#[derive(Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn backend_ready(&self, kind: BackendKind) {
        self.record(HealthEvent::BackendReady(kind));
    }

    fn backend_unavailable(&self, kind: BackendKind, _error: &BackendError) {
        self.record(HealthEvent::BackendUnavailable(kind));
    }
}

/// Structured health events tracked during tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthEvent {
    /// Bootstrap started.
    BootstrapStarting,
    /// Bootstrap completed successfully.
    BootstrapSucceeded,
    /// Bootstrap failed with an error description.
    BootstrapFailed(String),
    /// Backend initialised.
    BackendReady(BackendKind),
    /// Backend could not be initialised.
    BackendUnavailable(BackendKind),
}

/// Backend provider handing out scripted doubles, with injectable failures.
#[derive(Default)]
pub struct ScriptedBackendProvider {
    log: CallLog,
    failures: HashMap<BackendKind, String>,
}

impl ScriptedBackendProvider {
    /// Creates a provider whose backends record into `log`.
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            failures: HashMap::new(),
        }
    }

    /// Makes construction of `kind` fail.
    pub fn fail_on(mut self, kind: BackendKind, program: impl Into<String>) -> Self {
        self.failures.insert(kind, program.into());
        self
    }

    fn failure(&self, kind: BackendKind) -> Option<BackendError> {
        self.failures
            .get(&kind)
            .map(|program| BackendError::NotFound {
                role: "scripted",
                candidates: program.clone(),
            })
    }
}

impl BackendProvider for ScriptedBackendProvider {
    fn speech_engine(&self, _config: &Config) -> Result<Box<dyn SpeechEngine>, BackendError> {
        match self.failure(BackendKind::Speech) {
            Some(error) => Err(error),
            None => Ok(Box::new(ScriptedSpeech::new(self.log.clone()))),
        }
    }

    fn mixer(&self, _config: &Config) -> Result<Box<dyn Mixer>, BackendError> {
        match self.failure(BackendKind::Mixer) {
            Some(error) => Err(error),
            None => Ok(Box::new(ScriptedMixer::new(self.log.clone()))),
        }
    }
}
