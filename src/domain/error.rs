use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for oaim operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `spec.yaml` already exists at the target location.
    #[error("{} already exists; aborting.", .path.display())]
    SpecExists { path: PathBuf },

    /// `spec.yaml` is missing or unreadable.
    #[error("Error reading {}: {source}", .path.display())]
    SpecRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `spec.yaml` is not valid YAML for a spec document.
    #[error("Error parsing {}: {source}", .path.display())]
    SpecParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// HTTP GET against a peer failed before a body was received.
    #[error("Ping failed for {url}: {details}")]
    PeerRequest { url: String, details: String },

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Async runtime for the listener could not be started.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] io::Error),

    /// Listener failed to bind or stopped serving.
    #[error("Server error on {addr}: {source}")]
    Listener {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}
