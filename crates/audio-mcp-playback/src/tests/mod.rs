//! Unit and behavioural tests for the audio controller.


use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mockall::predicate::eq;
use mockall::{Sequence, mock};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::{AudioController, AudioError, AudioStatus, BackendError, Mixer, SpeechEngine};

mock! {
    Speech {}
    impl SpeechEngine for Speech {
        fn set_rate(&mut self, rate: i64);
        fn set_volume(&mut self, volume: f64);
        fn say(&mut self, text: &str) -> Result<(), BackendError>;
        fn stop(&mut self) -> Result<(), BackendError>;
    }
}

mock! {
    Player {}
    impl Mixer for Player {
        fn load(&mut self, track: &Path) -> Result<(), BackendError>;
        fn set_volume(&mut self, volume: f64);
        fn play(&mut self) -> Result<(), BackendError>;
        fn stop(&mut self) -> Result<(), BackendError>;
        fn is_busy(&mut self) -> Result<bool, BackendError>;
    }
}

fn backend_failure(message: &str) -> BackendError {
    BackendError::Spawn {
        program: String::from("mock"),
        source: io::Error::other(message.to_owned()),
    }
}

fn controller(speech: Option<MockSpeech>, mixer: Option<MockPlayer>) -> AudioController {
    AudioController::from_backends(speech, mixer)
}

struct Track {
    _dir: TempDir,
    path: PathBuf,
}

#[fixture]
fn track() -> Track {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("chime.wav");
    fs::write(&path, b"RIFF").expect("write track");
    Track { _dir: dir, path }
}

#[test]
fn speak_without_engine_reports_unavailable() {
    let mut audio = controller(None, Some(MockPlayer::new()));
    let error = audio.speak("hello", None, None).expect_err("no engine");
    assert!(matches!(error, AudioError::EngineUnavailable));
    assert_eq!(error.to_string(), "TTS engine not available");
}

#[test]
fn speak_passes_rate_through_and_clamps_volume() {
    let mut speech = MockSpeech::new();
    let mut order = Sequence::new();
    speech
        .expect_set_rate()
        .with(eq(900))
        .once()
        .in_sequence(&mut order)
        .return_const(());
    speech
        .expect_set_volume()
        .with(eq(1.0))
        .once()
        .in_sequence(&mut order)
        .return_const(());
    speech
        .expect_say()
        .withf(|text| text == "loud and fast")
        .once()
        .in_sequence(&mut order)
        .returning(|_| Ok(()));

    let mut audio = controller(Some(speech), None);
    let message = audio
        .speak("loud and fast", Some(900), Some(1.5))
        .expect("speak");
    assert_eq!(message, "Successfully spoke text: 'loud and fast'");
}

#[test]
fn speak_without_overrides_leaves_engine_settings_alone() {
    let mut speech = MockSpeech::new();
    speech.expect_set_rate().never();
    speech.expect_set_volume().never();
    speech.expect_say().once().returning(|_| Ok(()));

    let mut audio = controller(Some(speech), None);
    assert!(audio.speak("plain", None, None).is_ok());
}

#[test]
fn speak_echoes_a_truncated_preview() {
    let mut speech = MockSpeech::new();
    speech.expect_say().once().returning(|_| Ok(()));
    let text = "x".repeat(80);

    let mut audio = controller(Some(speech), None);
    let message = audio.speak(&text, None, None).expect("speak");
    assert_eq!(
        message,
        format!("Successfully spoke text: '{}...'", "x".repeat(50))
    );
}

#[test]
fn speak_failure_is_wrapped() {
    let mut speech = MockSpeech::new();
    speech
        .expect_say()
        .once()
        .returning(|_| Err(backend_failure("device busy")));

    let mut audio = controller(Some(speech), None);
    let error = audio.speak("hello", None, None).expect_err("engine fails");
    assert!(matches!(error, AudioError::SpeechFailed { .. }));
    let message = error.to_string();
    assert!(message.starts_with("Failed to speak text: "), "{message}");
    assert!(message.contains("device busy"), "{message}");
}

#[rstest]
fn play_without_mixer_reports_unavailable(track: Track) {
    let mut audio = controller(Some(MockSpeech::new()), None);
    let error = audio.play_file(&track.path, None).expect_err("no mixer");
    assert_eq!(error.to_string(), "Audio system not initialized");
}

#[test]
fn play_missing_file_never_touches_the_mixer() {
    let mut mixer = MockPlayer::new();
    mixer.expect_load().never();
    mixer.expect_play().never();

    let mut audio = controller(None, Some(mixer));
    let error = audio
        .play_file(Path::new("/no/such/file.mp3"), None)
        .expect_err("missing file");
    assert_eq!(error.to_string(), "Audio file not found: /no/such/file.mp3");
}

#[test]
fn play_directory_is_not_a_file() {
    let dir = TempDir::new().expect("temp dir");
    let mut audio = controller(None, Some(MockPlayer::new()));
    let error = audio.play_file(dir.path(), None).expect_err("directory");
    assert!(matches!(error, AudioError::FileNotFound { .. }));
}

#[rstest]
fn play_loads_then_sets_volume_then_starts(track: Track) {
    let mut mixer = MockPlayer::new();
    let mut order = Sequence::new();
    let expected = track.path.clone();
    mixer
        .expect_load()
        .withf(move |path| path == expected)
        .once()
        .in_sequence(&mut order)
        .returning(|_| Ok(()));
    mixer
        .expect_set_volume()
        .with(eq(0.0))
        .once()
        .in_sequence(&mut order)
        .return_const(());
    mixer
        .expect_play()
        .once()
        .in_sequence(&mut order)
        .returning(|| Ok(()));

    let mut audio = controller(None, Some(mixer));
    let message = audio.play_file(&track.path, Some(-0.2)).expect("play");
    assert_eq!(message, "Successfully started playing: chime.wav");
}

#[rstest]
fn play_failure_is_wrapped(track: Track) {
    let mut mixer = MockPlayer::new();
    mixer.expect_load().returning(|_| Ok(()));
    mixer
        .expect_play()
        .returning(|| Err(backend_failure("no sink")));

    let mut audio = controller(None, Some(mixer));
    let error = audio.play_file(&track.path, None).expect_err("play fails");
    assert!(error.to_string().starts_with("Failed to play audio file: "));
}

#[test]
fn stop_halts_mixer_before_speech() {
    let mut order = Sequence::new();
    let mut mixer = MockPlayer::new();
    mixer
        .expect_stop()
        .once()
        .in_sequence(&mut order)
        .returning(|| Ok(()));
    let mut speech = MockSpeech::new();
    speech
        .expect_stop()
        .once()
        .in_sequence(&mut order)
        .returning(|| Ok(()));

    let mut audio = controller(Some(speech), Some(mixer));
    assert_eq!(audio.stop().expect("stop"), "Audio playback stopped");
}

#[test]
fn stop_without_backends_succeeds() {
    let mut audio = controller(None, None);
    assert_eq!(audio.stop().expect("stop"), "Audio playback stopped");
    assert_eq!(audio.stop().expect("stop again"), "Audio playback stopped");
}

#[test]
fn stop_failure_is_wrapped() {
    let mut mixer = MockPlayer::new();
    mixer
        .expect_stop()
        .returning(|| Err(backend_failure("stuck")));

    let mut audio = controller(None, Some(mixer));
    let error = audio.stop().expect_err("stop fails");
    assert!(error.to_string().starts_with("Failed to stop audio: "));
}

#[rstest]
#[case(false, false)]
#[case(true, true)]
fn status_polls_the_mixer(#[case] busy: bool, #[case] expected: bool) {
    let mut mixer = MockPlayer::new();
    mixer.expect_is_busy().once().returning(move || Ok(busy));

    let mut audio = controller(Some(MockSpeech::new()), Some(mixer));
    let status = audio.status().expect("status");
    assert_eq!(
        status,
        AudioStatus {
            tts_available: true,
            mixer_available: true,
            music_playing: expected,
        }
    );
}

#[test]
fn status_without_backends_reports_nothing_available() {
    let mut audio = controller(None, None);
    assert_eq!(
        audio.status().expect("status"),
        AudioStatus {
            tts_available: false,
            mixer_available: false,
            music_playing: false,
        }
    );
}

#[test]
fn status_poll_failure_is_wrapped() {
    let mut mixer = MockPlayer::new();
    mixer.expect_is_busy().returning(|| {
        Err(BackendError::Poll {
            program: String::from("mock"),
            source: io::Error::other("gone"),
        })
    });

    let mut audio = controller(None, Some(mixer));
    let error = audio.status().expect_err("poll fails");
    assert!(error.to_string().starts_with("Failed to get audio status: "));
}
