//! Method routing for request dispatch.

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Methods the server answers with a real result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Session handshake.
    Initialize,
    /// Tool discovery.
    ToolsList,
    /// Tool invocation.
    ToolsCall,
    /// Resource discovery; always empty.
    ResourcesList,
    /// Prompt discovery; always empty.
    PromptsList,
}

impl Method {
    /// Resolves a wire method name. Matching is exact.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(Self::Initialize),
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            "resources/list" => Some(Self::ResourcesList),
            "prompts/list" => Some(Self::PromptsList),
            _ => None,
        }
    }

    /// Canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::ToolsList => "tools/list",
            Self::ToolsCall => "tools/call",
            Self::ResourcesList => "resources/list",
            Self::PromptsList => "prompts/list",
        }
    }
}
