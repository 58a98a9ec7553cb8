//! Speech synthesis through an `espeak-ng` compatible program.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::backend::SpeechEngine;
use crate::discovery::locate_program;
use crate::error::BackendError;

const SPEECH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::speech");

/// Speech engine that shells out to `espeak-ng` (or classic `espeak`).
///
/// Each utterance runs the synthesiser to completion, so the caller is
/// blocked until the audio has been spoken.
#[derive(Debug)]
pub struct EspeakEngine {
    program: PathBuf,
    rate: i64,
    volume: f64,
}

impl EspeakEngine {
    /// Program names searched for on `PATH`, in order of preference.
    pub const CANDIDATES: &'static [&'static str] = &["espeak-ng", "espeak"];

    /// Rate used until [`SpeechEngine::set_rate`] is called.
    pub const DEFAULT_RATE: i64 = 175;

    /// Creates an engine around a known program path.
    #[must_use]
    pub const fn new(program: PathBuf) -> Self {
        Self {
            program,
            rate: Self::DEFAULT_RATE,
            volume: 1.0,
        }
    }

    /// Locates the synthesiser, preferring an explicitly configured path.
    ///
    /// # Errors
    ///
    /// Returns an error when no usable program can be found.
    pub fn locate(configured: Option<&Path>) -> Result<Self, BackendError> {
        locate_program("speech", configured, Self::CANDIDATES).map(Self::new)
    }

    /// Path of the synthesiser program.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Current speech rate.
    #[must_use]
    pub const fn rate(&self) -> i64 {
        self.rate
    }

    /// Current volume.
    #[must_use]
    pub const fn volume(&self) -> f64 {
        self.volume
    }

    /// Builds the synthesiser invocation for `text`.
    ///
    /// Standard output is discarded so nothing the synthesiser prints can
    /// reach the protocol stream.
    #[must_use]
    pub fn command(&self, text: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-s")
            .arg(self.rate.to_string())
            .arg("-a")
            .arg(amplitude(self.volume).to_string())
            .arg("--")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        command
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl SpeechEngine for EspeakEngine {
    fn set_rate(&mut self, rate: i64) {
        self.rate = rate;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn say(&mut self, text: &str) -> Result<(), BackendError> {
        let mut command = self.command(text);
        debug!(target: SPEECH_TARGET, command = ?command, "running synthesiser");

        let output = command.output().map_err(|source| BackendError::Spawn {
            program: self.program_name(),
            source,
        })?;

        if output.status.success() {
            return Ok(());
        }

        Err(BackendError::Exited {
            program: self.program_name(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        })
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        // `say` waits for the synthesiser, so no utterance outlives it.
        debug!(target: SPEECH_TARGET, "no utterance in progress");
        Ok(())
    }
}

/// Maps a `[0.0, 1.0]` volume onto espeak's amplitude scale.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "volume is clamped to [0, 1] so the amplitude fits in 0..=100"
)]
fn amplitude(volume: f64) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}
