use crate::domain::AppError;

/// Blocking HTTP client used to reach peers.
pub trait PeerClient {
    /// Issue a GET against `url` and return the response body as text.
    fn get(&self, url: &str) -> Result<String, AppError>;
}
