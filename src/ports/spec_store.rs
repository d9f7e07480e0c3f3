use std::path::PathBuf;

use crate::domain::AppError;

/// Storage for the `spec.yaml` document.
pub trait SpecStore {
    /// Location of the spec document, used in messages.
    fn spec_path(&self) -> PathBuf;

    /// Create the spec document with `content`, failing if it already exists.
    fn create(&self, content: &str) -> Result<(), AppError>;

    /// Read the spec document and return its bootstrap peers in file order.
    ///
    /// Only `bootstrap.peers` is interpreted; other keys never fail the load.
    fn load_peers(&self) -> Result<Vec<String>, AppError>;
}
