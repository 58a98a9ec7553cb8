//! Background file playback through an external audio player process.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::backend::Mixer;
use crate::discovery::locate_program;
use crate::error::BackendError;

const MIXER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::mixer");

/// Command-line conventions of the supported audio players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// FFmpeg's `ffplay`.
    Ffplay,
    /// The `mpv` media player.
    Mpv,
    /// PulseAudio's `paplay`.
    Paplay,
    /// macOS `afplay`.
    Afplay,
    /// ALSA's `aplay`, which has no volume control.
    Aplay,
    /// Any other program, invoked with the track as its only argument.
    Generic,
}

impl PlayerKind {
    /// Infers the player conventions from the program's file name.
    #[must_use]
    pub fn from_program(program: &Path) -> Self {
        let stem = program
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_ascii_lowercase());
        match stem.as_deref() {
            Some("ffplay") => Self::Ffplay,
            Some("mpv") => Self::Mpv,
            Some("paplay") => Self::Paplay,
            Some("afplay") => Self::Afplay,
            Some("aplay") => Self::Aplay,
            _ => Self::Generic,
        }
    }

    /// Whether the player can apply a volume level.
    #[must_use]
    pub const fn supports_volume(self) -> bool {
        !matches!(self, Self::Aplay | Self::Generic)
    }

    /// Arguments that play `track` once at `volume` without opening a window.
    #[must_use]
    pub fn arguments(self, track: &Path, volume: f64) -> Vec<OsString> {
        let mut args: Vec<OsString> = match self {
            Self::Ffplay => vec![
                "-nodisp".into(),
                "-autoexit".into(),
                "-loglevel".into(),
                "quiet".into(),
                "-volume".into(),
                percent(volume).to_string().into(),
            ],
            Self::Mpv => vec![
                "--no-video".into(),
                "--really-quiet".into(),
                format!("--volume={}", percent(volume)).into(),
            ],
            Self::Paplay => vec![format!("--volume={}", pulse_volume(volume)).into()],
            Self::Afplay => vec!["-v".into(), format!("{:.2}", volume.clamp(0.0, 1.0)).into()],
            Self::Aplay => vec!["-q".into()],
            Self::Generic => Vec::new(),
        };
        args.push(track.as_os_str().to_owned());
        args
    }
}

/// Mixer that plays one track at a time in a detached player process.
///
/// Starting a new track replaces the previous player. The player process is
/// killed when the mixer is dropped.
#[derive(Debug)]
pub struct PlayerMixer {
    program: PathBuf,
    kind: PlayerKind,
    track: Option<PathBuf>,
    volume: f64,
    child: Option<Child>,
}

impl PlayerMixer {
    /// Program names searched for on `PATH`, in order of preference.
    pub const CANDIDATES: &'static [&'static str] = &["ffplay", "mpv", "paplay", "afplay", "aplay"];

    /// Creates a mixer around a known player program.
    #[must_use]
    pub fn new(program: PathBuf) -> Self {
        let kind = PlayerKind::from_program(&program);
        Self {
            program,
            kind,
            track: None,
            volume: 1.0,
            child: None,
        }
    }

    /// Locates a player, preferring an explicitly configured path.
    ///
    /// # Errors
    ///
    /// Returns an error when no usable player can be found.
    pub fn locate(configured: Option<&Path>) -> Result<Self, BackendError> {
        locate_program("player", configured, Self::CANDIDATES).map(Self::new)
    }

    /// Path of the player program.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Player conventions in use.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Volume applied to the next play.
    #[must_use]
    pub const fn volume(&self) -> f64 {
        self.volume
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn halt(&mut self) -> Result<(), BackendError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        let pid = child.id();
        match terminate(&mut child) {
            Ok(true) => {
                debug!(target: MIXER_TARGET, pid, "player stopped");
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(source) => {
                // Kept so `Drop` makes a last attempt at killing it.
                self.child = Some(child);
                Err(BackendError::Signal {
                    program: self.program_name(),
                    source,
                })
            }
        }
    }
}

/// The parts of a running player process the mixer relies on.
trait PlayerProcess {
    fn has_exited(&mut self) -> io::Result<bool>;
    fn kill(&mut self) -> io::Result<()>;
    fn reap(&mut self) -> io::Result<()>;
}

impl PlayerProcess for Child {
    fn has_exited(&mut self) -> io::Result<bool> {
        self.try_wait().map(|status| status.is_some())
    }

    fn kill(&mut self) -> io::Result<()> {
        Self::kill(self)
    }

    fn reap(&mut self) -> io::Result<()> {
        self.wait().map(drop)
    }
}

/// Kills and reaps `process` unless it has already exited.
///
/// A process whose state cannot be polled is treated as still running.
/// Returns whether a kill was needed.
fn terminate(process: &mut impl PlayerProcess) -> io::Result<bool> {
    let exited = process.has_exited().unwrap_or_else(|error| {
        warn!(target: MIXER_TARGET, %error, "could not poll player; killing it");
        false
    });
    if exited {
        return Ok(false);
    }

    process.kill()?;
    process.reap()?;
    Ok(true)
}

impl Mixer for PlayerMixer {
    fn load(&mut self, track: &Path) -> Result<(), BackendError> {
        self.track = Some(track.to_path_buf());
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) {
        if !self.kind.supports_volume() {
            warn!(
                target: MIXER_TARGET,
                player = %self.program.display(),
                "player has no volume control; volume ignored"
            );
        }
        self.volume = volume;
    }

    fn play(&mut self) -> Result<(), BackendError> {
        let track = self.track.clone().ok_or(BackendError::NothingLoaded)?;
        self.halt()?;

        let child = Command::new(&self.program)
            .args(self.kind.arguments(&track, self.volume))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| BackendError::Spawn {
                program: self.program_name(),
                source,
            })?;

        debug!(
            target: MIXER_TARGET,
            pid = child.id(),
            track = %track.display(),
            volume = self.volume,
            "player started"
        );
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        self.halt()
    }

    fn is_busy(&mut self) -> Result<bool, BackendError> {
        let Some(child) = self.child.as_mut() else {
            return Ok(false);
        };

        let exited = child.try_wait().map_err(|source| BackendError::Poll {
            program: self.program.display().to_string(),
            source,
        })?;
        match exited {
            Some(status) => {
                debug!(target: MIXER_TARGET, %status, "player finished");
                self.child = None;
                Ok(false)
            }
            None => Ok(true),
        }
    }
}

impl Drop for PlayerMixer {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            child.kill().ok();
            child.wait().ok();
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "volume is clamped to [0, 1] so the percentage fits in 0..=100"
)]
fn percent(volume: f64) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "volume is clamped to [0, 1] so the level fits in 0..=65536"
)]
fn pulse_volume(volume: f64) -> u32 {
    (volume.clamp(0.0, 1.0) * 65536.0).round() as u32
}
