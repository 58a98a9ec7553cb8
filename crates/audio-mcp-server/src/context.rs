//! Process-lifetime server state.

use audio_mcp_playback::AudioController;

use crate::dispatch::Dispatcher;
use crate::protocol::ServerInfo;
use crate::registry::ToolRegistry;

/// Everything a session needs: the tool catalogue, the audio controller and
/// the announced server identity.
///
/// Built once at start-up. Request handling borrows from it, so the audio
/// controller has exactly one owner for the life of the process.
#[derive(Debug)]
pub struct ServerContext {
    pub(crate) registry: ToolRegistry,
    pub(crate) audio: AudioController,
    pub(crate) info: ServerInfo,
}

impl ServerContext {
    /// Creates a context around `audio` with the standard tool registry.
    #[must_use]
    pub fn new(audio: AudioController) -> Self {
        Self {
            registry: ToolRegistry::new(),
            audio,
            info: ServerInfo::default(),
        }
    }

    /// Replaces the announced server identity.
    #[must_use]
    pub fn with_info(mut self, info: ServerInfo) -> Self {
        self.info = info;
        self
    }

    /// Tool catalogue.
    #[must_use]
    pub const fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Announced server identity.
    #[must_use]
    pub const fn info(&self) -> &ServerInfo {
        &self.info
    }

    /// Borrows the context as a request dispatcher.
    #[must_use]
    pub const fn dispatcher(&mut self) -> Dispatcher<'_> {
        Dispatcher::new(&self.registry, &mut self.audio, &self.info)
    }
}
