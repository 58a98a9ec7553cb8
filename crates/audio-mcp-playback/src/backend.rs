//! Seams between the controller and the underlying audio programs.

use std::path::Path;

use crate::error::BackendError;

/// A speech synthesiser with a single output channel.
///
/// Rate and volume are sticky: once set they apply to every later
/// utterance until changed again.
pub trait SpeechEngine {
    /// Sets the speech rate in words per minute. The value is not validated.
    fn set_rate(&mut self, rate: i64);

    /// Sets the output volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f64);

    /// Speaks `text`, returning once the utterance has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the synthesiser cannot be started or reports a
    /// failure.
    fn say(&mut self, text: &str) -> Result<(), BackendError>;

    /// Halts any utterance still in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the synthesiser cannot be signalled.
    fn stop(&mut self) -> Result<(), BackendError>;
}

/// A single-track music channel that plays in the background.
pub trait Mixer {
    /// Selects the track the next [`Mixer::play`] call starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the track cannot be prepared for playback.
    fn load(&mut self, track: &Path) -> Result<(), BackendError>;

    /// Sets the playback volume in `[0.0, 1.0]` for subsequent plays.
    fn set_volume(&mut self, volume: f64);

    /// Starts the loaded track, replacing anything already playing.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is loaded or playback cannot start.
    fn play(&mut self) -> Result<(), BackendError>;

    /// Stops playback. Stopping an idle mixer succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the playing track cannot be halted.
    fn stop(&mut self) -> Result<(), BackendError>;

    /// Reports whether a track is currently playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the playback state cannot be polled.
    fn is_busy(&mut self) -> Result<bool, BackendError>;
}
