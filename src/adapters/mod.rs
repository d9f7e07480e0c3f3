pub mod peer_client_http;
pub mod ping_server;
pub mod spec_filesystem;

pub use peer_client_http::HttpPeerClient;
pub use ping_server::PingServer;
pub use spec_filesystem::FilesystemSpecStore;
