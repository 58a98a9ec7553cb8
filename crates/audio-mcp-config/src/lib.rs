//! Shared configuration for the audio MCP server.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, then an
//! optional TOML file (`--config-path` or `AUDIO_MCP_CONFIG_PATH`), then
//! `AUDIO_MCP_*` environment variables, then command-line flags. Every field
//! is optional so an absent layer never masks a lower one; the accessors on
//! [`Config`] apply the defaults from [`defaults`].

pub mod defaults;
mod logging;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use self::defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_SPEECH_RATE, DEFAULT_SPEECH_VOLUME, default_log_filter,
    default_log_format,
};
pub use self::logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for the server process.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "AUDIO_MCP")]
pub struct Config {
    /// Filter expression passed to `tracing_subscriber::EnvFilter`.
    pub log_filter: Option<String>,
    /// Output format for diagnostic logs written to stderr.
    pub log_format: Option<LogFormat>,
    /// Explicit path to the speech synthesiser executable.
    pub speech_program: Option<Utf8PathBuf>,
    /// Speech rate applied when the engine starts.
    pub speech_rate: Option<i64>,
    /// Speech volume applied when the engine starts.
    pub speech_volume: Option<f64>,
    /// Explicit path to the audio player executable.
    pub player_program: Option<Utf8PathBuf>,
    /// Runs the human-oriented console instead of the JSON-RPC loop.
    pub interactive: Option<bool>,
}

impl Config {
    /// Log filter expression, falling back to [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(default_log_format)
    }

    /// Configured speech synthesiser, if one was named explicitly.
    #[must_use]
    pub fn speech_program(&self) -> Option<&Utf8Path> {
        self.speech_program.as_deref()
    }

    /// Initial speech rate in words per minute.
    #[must_use]
    pub fn speech_rate(&self) -> i64 {
        self.speech_rate.unwrap_or(DEFAULT_SPEECH_RATE)
    }

    /// Initial speech volume, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn speech_volume(&self) -> f64 {
        self.speech_volume
            .unwrap_or(DEFAULT_SPEECH_VOLUME)
            .clamp(0.0, 1.0)
    }

    /// Configured audio player, if one was named explicitly.
    #[must_use]
    pub fn player_program(&self) -> Option<&Utf8Path> {
        self.player_program.as_deref()
    }

    /// Whether the interactive console was requested.
    #[must_use]
    pub fn interactive(&self) -> bool {
        self.interactive.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_apply_when_fields_are_unset() {
        let config = Config::default();
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.speech_rate(), 150);
        assert!((config.speech_volume() - 0.8).abs() < f64::EPSILON);
        assert!(config.speech_program().is_none());
        assert!(config.player_program().is_none());
        assert!(!config.interactive());
    }

    #[rstest]
    #[case(1.7, 1.0)]
    #[case(-0.2, 0.0)]
    #[case(0.35, 0.35)]
    fn speech_volume_is_clamped(#[case] configured: f64, #[case] expected: f64) {
        let config = Config {
            speech_volume: Some(configured),
            ..Config::default()
        };
        assert!((config.speech_volume() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config {
            log_filter: Some(String::from("debug")),
            log_format: Some(LogFormat::Json),
            speech_program: Some(Utf8PathBuf::from("/opt/espeak-ng")),
            speech_rate: Some(220),
            interactive: Some(true),
            ..Config::default()
        };
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(
            config.speech_program(),
            Some(Utf8Path::new("/opt/espeak-ng"))
        );
        assert_eq!(config.speech_rate(), 220);
        assert!(config.interactive());
    }
}
