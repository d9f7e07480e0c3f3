use crate::domain::AppError;
use crate::ports::SpecStore;

/// Load bootstrap peers from the spec document, in file order.
pub fn load_bootstrap_peers<S: SpecStore>(store: &S) -> Result<Vec<String>, AppError> {
    store.load_peers()
}

/// Render the peer listing printed by `oaim discover`.
pub fn render_peers(peers: &[String]) -> String {
    let mut out = String::from("Discovered bootstrap peers:\n");
    for peer in peers {
        out.push_str(&format!("  • {}\n", peer));
    }
    out
}
