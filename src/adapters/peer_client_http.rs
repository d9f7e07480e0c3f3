//! Peer client implementation using the blocking reqwest client.

use reqwest::blocking::Client;

use crate::domain::AppError;
use crate::ports::PeerClient;

/// HTTP client for pinging peers.
///
/// Uses the client's default timeouts; there is no retry.
#[derive(Debug, Clone)]
pub struct HttpPeerClient {
    client: Client,
}

impl HttpPeerClient {
    /// Create a new HTTP client with default settings.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("oaim/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PeerClient for HttpPeerClient {
    fn get(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::PeerRequest { url: url.to_string(), details: e.to_string() })?;

        tracing::debug!(url, status = %response.status(), "peer responded");

        // Non-2xx replies still carry a body worth showing. Once headers
        // arrived the peer answered, so a broken body reads as empty.
        match response.text() {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to read peer response body");
                Ok(String::new())
            }
        }
    }
}
