//! Server bootstrap orchestration.

use std::io::{BufRead, Write};
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;

use audio_mcp_config::Config;

use crate::backends::{BackendProvider, initialise_audio};
use crate::console::{ConsoleError, run_console};
use crate::context::ServerContext;
use crate::health::HealthReporter;
use crate::telemetry::{self, TelemetryError};
use crate::transport::{SessionSummary, TransportError, serve};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the server configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when no configuration can be resolved.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`OrthoConfig::load`] on [`Config`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader that returns a configuration resolved elsewhere.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps an already resolved configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
}

/// Result of a successful bootstrap invocation.
#[derive(Debug)]
pub struct Server {
    config: Config,
    context: ServerContext,
}

impl Server {
    /// Accessor for the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Accessor for the server state.
    #[must_use]
    pub const fn context(&self) -> &ServerContext {
        &self.context
    }

    /// Mutable accessor for the server state.
    pub const fn context_mut(&mut self) -> &mut ServerContext {
        &mut self.context
    }

    /// Serves JSON-RPC requests from `reader` until end of input.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when a response cannot be written.
    pub fn serve<R, W>(
        &mut self,
        reader: &mut R,
        writer: W,
    ) -> Result<SessionSummary, TransportError>
    where
        R: BufRead,
        W: Write,
    {
        serve(reader, writer, &mut self.context.dispatcher())
    }

    /// Runs the interactive console.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when console output cannot be written.
    pub fn console<R, W>(&mut self, reader: &mut R, output: &mut W) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
    {
        run_console(reader, output, &mut self.context)
    }
}

/// Bootstraps the server using the supplied collaborators.
///
/// Missing audio backends are reported and tolerated; only configuration and
/// telemetry failures abort start-up.
///
/// # Errors
///
/// Returns [`BootstrapError`] when configuration cannot be loaded or the
/// telemetry subscriber cannot be installed.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
    provider: &dyn BackendProvider,
) -> Result<Server, BootstrapError> {
    reporter.bootstrap_starting();

    let config = match loader.load() {
        Ok(config) => config,
        Err(source) => {
            let error = BootstrapError::Configuration { source };
            reporter.bootstrap_failed(&error);
            return Err(error);
        }
    };

    if let Err(source) = telemetry::initialise(&config) {
        let error = BootstrapError::Telemetry { source };
        reporter.bootstrap_failed(&error);
        return Err(error);
    }

    let audio = initialise_audio(provider, &config, reporter.as_ref());
    reporter.bootstrap_succeeded(&config);

    Ok(Server {
        config,
        context: ServerContext::new(audio),
    })
}
