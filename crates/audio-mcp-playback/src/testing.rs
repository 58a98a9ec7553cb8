//! Scripted speech engine and mixer doubles.
//!
//! Both doubles append every call to a shared [`CallLog`] so a test can
//! assert on the exact sequence of backend interactions, and both accept
//! injected failures. Enabled for downstream crates through the
//! `test-support` feature.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::backend::{Mixer, SpeechEngine};
use crate::error::BackendError;

/// One interaction with a scripted backend.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    /// `SpeechEngine::set_rate`.
    SetRate(i64),
    /// `SpeechEngine::set_volume`.
    SetSpeechVolume(f64),
    /// `SpeechEngine::say`.
    Say(String),
    /// `SpeechEngine::stop`.
    StopSpeech,
    /// `Mixer::load`.
    Load(PathBuf),
    /// `Mixer::set_volume`.
    SetMixerVolume(f64),
    /// `Mixer::play`.
    Play,
    /// `Mixer::stop`.
    StopMixer,
    /// `Mixer::is_busy`.
    Poll,
}

/// Shared, ordered record of backend calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<AudioCall>>>,
}

impl CallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every call recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }

    fn push(&self, call: AudioCall) {
        self.calls.borrow_mut().push(call);
    }
}

fn injected(program: &str, message: &str) -> BackendError {
    BackendError::Spawn {
        program: program.to_owned(),
        source: io::Error::other(message.to_owned()),
    }
}

/// Speech engine that records calls instead of producing sound.
#[derive(Debug, Default)]
pub struct ScriptedSpeech {
    log: CallLog,
    say_failure: Option<String>,
    stop_failure: Option<String>,
}

impl ScriptedSpeech {
    /// Creates an engine that records into `log`.
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            say_failure: None,
            stop_failure: None,
        }
    }

    /// Makes every `say` call fail with `message`.
    #[must_use]
    pub fn failing_say(mut self, message: impl Into<String>) -> Self {
        self.say_failure = Some(message.into());
        self
    }

    /// Makes every `stop` call fail with `message`.
    #[must_use]
    pub fn failing_stop(mut self, message: impl Into<String>) -> Self {
        self.stop_failure = Some(message.into());
        self
    }
}

impl SpeechEngine for ScriptedSpeech {
    fn set_rate(&mut self, rate: i64) {
        self.log.push(AudioCall::SetRate(rate));
    }

    fn set_volume(&mut self, volume: f64) {
        self.log.push(AudioCall::SetSpeechVolume(volume));
    }

    fn say(&mut self, text: &str) -> Result<(), BackendError> {
        self.log.push(AudioCall::Say(text.to_owned()));
        match &self.say_failure {
            Some(message) => Err(injected("scripted-speech", message)),
            None => Ok(()),
        }
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        self.log.push(AudioCall::StopSpeech);
        match &self.stop_failure {
            Some(message) => Err(injected("scripted-speech", message)),
            None => Ok(()),
        }
    }
}

/// Mixer that records calls and tracks a simulated busy flag.
///
/// `play` marks the mixer busy and `stop` marks it idle.
#[derive(Debug, Default)]
pub struct ScriptedMixer {
    log: CallLog,
    busy: bool,
    loaded: Option<PathBuf>,
    play_failure: Option<String>,
    stop_failure: Option<String>,
    poll_failure: Option<String>,
}

impl ScriptedMixer {
    /// Creates a mixer that records into `log`.
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    /// Makes every `play` call fail with `message`.
    #[must_use]
    pub fn failing_play(mut self, message: impl Into<String>) -> Self {
        self.play_failure = Some(message.into());
        self
    }

    /// Makes every `stop` call fail with `message`.
    #[must_use]
    pub fn failing_stop(mut self, message: impl Into<String>) -> Self {
        self.stop_failure = Some(message.into());
        self
    }

    /// Makes every `is_busy` call fail with `message`.
    #[must_use]
    pub fn failing_poll(mut self, message: impl Into<String>) -> Self {
        self.poll_failure = Some(message.into());
        self
    }
}

impl Mixer for ScriptedMixer {
    fn load(&mut self, track: &Path) -> Result<(), BackendError> {
        self.log.push(AudioCall::Load(track.to_path_buf()));
        self.loaded = Some(track.to_path_buf());
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) {
        self.log.push(AudioCall::SetMixerVolume(volume));
    }

    fn play(&mut self) -> Result<(), BackendError> {
        self.log.push(AudioCall::Play);
        if let Some(message) = &self.play_failure {
            return Err(injected("scripted-mixer", message));
        }
        if self.loaded.is_none() {
            return Err(BackendError::NothingLoaded);
        }
        self.busy = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        self.log.push(AudioCall::StopMixer);
        if let Some(message) = &self.stop_failure {
            return Err(injected("scripted-mixer", message));
        }
        self.busy = false;
        Ok(())
    }

    fn is_busy(&mut self) -> Result<bool, BackendError> {
        self.log.push(AudioCall::Poll);
        match &self.poll_failure {
            Some(message) => Err(BackendError::Poll {
                program: String::from("scripted-mixer"),
                source: io::Error::other(message.clone()),
            }),
            None => Ok(self.busy),
        }
    }
}
