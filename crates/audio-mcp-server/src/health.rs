//! Structured health reporting for server lifecycle events.

use std::sync::Arc;

use audio_mcp_config::Config;
use audio_mcp_playback::BackendError;

use crate::backends::BackendKind;
use crate::bootstrap::BootstrapError;

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer trait used to surface lifecycle events to telemetry sinks.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn bootstrap_starting(&self);

    /// Invoked after bootstrap completes successfully.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Invoked when bootstrap fails.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked when a backend initialised.
    fn backend_ready(&self, kind: BackendKind);

    /// Invoked when a backend could not be initialised.
    fn backend_unavailable(&self, kind: BackendKind, error: &BackendError);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn backend_ready(&self, kind: BackendKind) {
        (**self).backend_ready(kind);
    }

    fn backend_unavailable(&self, kind: BackendKind, error: &BackendError) {
        (**self).backend_unavailable(kind, error);
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting audio server bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            log_filter = %config.log_filter(),
            log_format = %config.log_format(),
            interactive = config.interactive(),
            "audio server bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "audio server bootstrap failed"
        );
    }

    fn backend_ready(&self, kind: BackendKind) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "backend_ready",
            backend = %kind,
            "backend ready"
        );
    }

    fn backend_unavailable(&self, kind: BackendKind, error: &BackendError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "backend_unavailable",
            backend = %kind,
            error = %error,
            "backend unavailable; dependent tools will fail"
        );
    }
}
