//! oaim: scaffold an agent `spec.yaml`, probe bootstrap peers, and serve `/ping`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;


use std::io::{self, Write};
use std::net::{Ipv4Addr, SocketAddr};

use adapters::{FilesystemSpecStore, HttpPeerClient, PingServer};
use app::AppContext;
use app::commands::{discover, init, run_agent};

pub use app::commands::run_agent::AgentOutcome;
pub use domain::{AgentOptions, AppError, DEFAULT_PORT, ProbeOutcome, SpecDocument};

/// Write the spec template to `./spec.yaml`.
pub fn init() -> Result<(), AppError> {
    let store = FilesystemSpecStore::current()?;

    init::execute(&store)?;
    println!("Initialized spec.yaml");
    Ok(())
}

/// Print the bootstrap peers listed in `./spec.yaml`.
///
/// Returns the peers in file order. A missing or malformed spec is an error.
pub fn discover() -> Result<Vec<String>, AppError> {
    let store = FilesystemSpecStore::current()?;

    let peers = discover::load_bootstrap_peers(&store)?;
    print!("{}", discover::render_peers(&peers));
    Ok(peers)
}

/// Run the agent.
///
/// With `ping` set, pings that peer once and returns. Otherwise probes the
/// bootstrap peers and then serves `/ping` on `port` until the listener fails.
pub fn run_agent(options: AgentOptions) -> Result<(), AppError> {
    let store = FilesystemSpecStore::current()?;
    let client = HttpPeerClient::new()?;
    let ctx = AppContext::new(store, client);

    let outcome = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let outcome = run_agent::execute(&ctx, &options, &mut out)?;
        out.flush()?;
        outcome
    };

    match outcome {
        AgentOutcome::Pinged { .. } => Ok(()),
        AgentOutcome::ReadyToServe { probes } => {
            let failed = probes.iter().filter(|p| !p.is_reply()).count();
            tracing::info!(probed = probes.len(), failed, "bootstrap probing finished");

            let server = PingServer::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, options.port)))?;
            println!("🟢 OAIM Agent listening on :{}", options.port);
            server.serve()
        }
    }
}
