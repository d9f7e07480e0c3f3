/// Port the agent listens on when `--port` is not given.
pub const DEFAULT_PORT: u16 = 8080;

/// Path of the liveness route.
pub const PING_PATH: &str = "/ping";

/// Body returned by the liveness route.
pub const PONG_BODY: &str = "pong\n";

/// Options for `oaim run-agent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOptions {
    pub port: u16,
    /// Explicit peer to ping; switches the agent to client-only mode.
    pub ping: Option<String>,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, ping: None }
    }
}

/// Result of probing a single bootstrap peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reply { peer: String, body: String },
    Failed { peer: String, error: String },
}

impl ProbeOutcome {
    pub fn peer(&self) -> &str {
        match self {
            ProbeOutcome::Reply { peer, .. } | ProbeOutcome::Failed { peer, .. } => peer,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, ProbeOutcome::Reply { .. })
    }
}
