use crate::ports::{PeerClient, SpecStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SpecStore, C: PeerClient> {
    spec: S,
    client: C,
}

impl<S: SpecStore, C: PeerClient> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(spec: S, client: C) -> Self {
        Self { spec, client }
    }

    /// Get a reference to the spec store.
    pub fn spec(&self) -> &S {
        &self.spec
    }

    /// Get a reference to the peer client.
    pub fn client(&self) -> &C {
        &self.client
    }
}
