//! `oaim run-agent`: client-only ping or bootstrap probing before serving.

use std::io::Write;

use crate::app::AppContext;
use crate::app::commands::discover::load_bootstrap_peers;
use crate::domain::{AgentOptions, AppError, ProbeOutcome};
use crate::ports::{PeerClient, SpecStore};

/// What the caller should do once the command returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    /// `--ping` was given; the agent is done and must not serve.
    Pinged { body: String },
    /// Bootstrap probing finished; the caller starts the listener next.
    ReadyToServe { probes: Vec<ProbeOutcome> },
}

/// Execute the run-agent command up to the point of serving.
///
/// With an explicit ping target the spec document is never read.
pub fn execute<S, C, W>(
    ctx: &AppContext<S, C>,
    options: &AgentOptions,
    out: &mut W,
) -> Result<AgentOutcome, AppError>
where
    S: SpecStore,
    C: PeerClient,
    W: Write,
{
    if let Some(url) = options.ping.as_deref() {
        let body = ctx.client().get(url)?;
        writeln!(out, "Received response from peer: {}", body)?;
        return Ok(AgentOutcome::Pinged { body });
    }

    let probes = match load_bootstrap_peers(ctx.spec()) {
        Ok(peers) => {
            writeln!(out, "🔍 Auto-discovering peers...")?;
            probe_peers(ctx.client(), &peers, out)?
        }
        Err(err) => {
            // Printed outside the log filter so it is never suppressed.
            eprintln!("Warning: could not load bootstrap peers: {}", err);
            Vec::new()
        }
    };

    Ok(AgentOutcome::ReadyToServe { probes })
}

/// Ping each peer once, strictly in list order, printing each result.
///
/// A failed peer is reported and skipped; there is no retry.
pub fn probe_peers<C, W>(
    client: &C,
    peers: &[String],
    out: &mut W,
) -> Result<Vec<ProbeOutcome>, AppError>
where
    C: PeerClient,
    W: Write,
{
    let mut outcomes = Vec::with_capacity(peers.len());

    for peer in peers {
        write!(out, "Pinging {} … ", peer)?;
        out.flush()?;

        let outcome = match client.get(peer) {
            Ok(body) => {
                writeln!(out, "{}", body)?;
                ProbeOutcome::Reply { peer: peer.clone(), body }
            }
            Err(err) => {
                writeln!(out, "failed: {}", err)?;
                tracing::debug!(peer = %peer, error = %err, "peer probe failed");
                ProbeOutcome::Failed { peer: peer.clone(), error: err.to_string() }
            }
        };
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
