//! The `spec.yaml` document: template and parsing.

use serde::Deserialize;

/// File name of the spec document, relative to the working directory.
pub const SPEC_FILE: &str = "spec.yaml";

/// Template written by `oaim init`.
///
/// The `negotiation` and `billing` domains are placeholders with no behavior.
pub const SPEC_TEMPLATE: &str = r#"version: "0.1"
domains:
  - name: discovery
    description: "How agents find each other"
  - name: negotiation
    description: "Task proposals & acceptances"
  - name: execution
    description: "Data exchange & status"
  - name: billing
    description: "Micropayments & revenue reporting"
# bootstrap:
#   peers:
#     - http://localhost:8081/ping
"#;

/// Parsed spec document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpecDocument {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub domains: Vec<DomainDescriptor>,
    #[serde(default)]
    pub bootstrap: Bootstrap,
}

/// Named domain entry. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DomainDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Bootstrap section listing peer addresses to probe at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Bootstrap {
    /// Peer addresses, kept as raw strings in file order.
    #[serde(default)]
    pub peers: Vec<String>,
}

impl SpecDocument {
    /// Parse a spec document from YAML content.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, which serde_yaml rejects for structs.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Bootstrap peers in file order.
    pub fn peers(&self) -> &[String] {
        &self.bootstrap.peers
    }

    pub fn into_peers(self) -> Vec<String> {
        self.bootstrap.peers
    }
}

/// Peers-only view of a spec document. Every key outside `bootstrap`
/// is skipped whatever its shape.
#[derive(Debug, Default, Deserialize)]
struct PeersView {
    #[serde(default)]
    bootstrap: Bootstrap,
}

/// Parse only `bootstrap.peers` from YAML content, in file order.
pub fn parse_bootstrap_peers(content: &str) -> Result<Vec<String>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let view: PeersView = serde_yaml::from_str(content)?;
    Ok(view.bootstrap.peers)
}
