//! Audio output ownership for the audio MCP server.
//!
//! The crate owns the two audio channels the server can drive: a speech
//! synthesiser and a file mixer. Both are modelled as traits
//! ([`SpeechEngine`] and [`Mixer`]) so the [`AudioController`] can be
//! exercised without sound hardware. The production implementations drive
//! command-line programs:
//!
//! - [`EspeakEngine`] runs an `espeak-ng` compatible synthesiser and blocks
//!   until the utterance has been spoken.
//! - [`PlayerMixer`] launches an audio player process (`ffplay`, `mpv`,
//!   `paplay`, `afplay` or `aplay`) and returns immediately; playback state is
//!   observed by polling the child process.
//!
//! Either backend may be missing on a given host. The controller treats a
//! missing backend as permanently unavailable: every operation that needs it
//! fails with the same diagnostic while the status query keeps working.
//!
//! # Example
//!
//! ```rust,no_run
//! use audio_mcp_playback::{AudioController, EspeakEngine, PlayerMixer};
//!
//! let speech = EspeakEngine::locate(None).ok();
//! let mixer = PlayerMixer::locate(None).ok();
//! let mut controller = AudioController::from_backends(speech, mixer);
//! let status = controller.status().expect("status query");
//! println!("speech ready: {}", status.tts_available);
//! ```

mod backend;
mod controller;
mod discovery;
mod error;
mod espeak;
mod player;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

#[cfg(test)]
mod tests;

pub use self::backend::{Mixer, SpeechEngine};
pub use self::controller::{AudioController, AudioStatus, PREVIEW_CHARS};
pub use self::discovery::locate_program;
pub use self::error::{AudioError, BackendError};
pub use self::espeak::EspeakEngine;
pub use self::player::{PlayerKind, PlayerMixer};
