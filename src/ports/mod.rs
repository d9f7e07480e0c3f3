mod peer_client;
mod spec_store;

pub use peer_client::PeerClient;
pub use spec_store::SpecStore;
