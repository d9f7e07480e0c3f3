//! Liveness listener built on axum.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::any;
use tokio::net::TcpListener;
use tokio::runtime::{Builder, Runtime};

use crate::domain::{AppError, PING_PATH, PONG_BODY};

/// Router exposing the single `/ping` route.
pub fn router() -> Router {
    Router::new().route(PING_PATH, any(pong))
}

async fn pong() -> &'static str {
    PONG_BODY
}

/// A bound listener ready to serve `/ping`.
///
/// Owns its runtime so callers stay synchronous; blocking HTTP calls must be
/// finished before [`PingServer::bind`] is called.
#[derive(Debug)]
pub struct PingServer {
    runtime: Runtime,
    listener: TcpListener,
    addr: SocketAddr,
}

impl PingServer {
    /// Start a runtime and bind `addr`.
    pub fn bind(addr: SocketAddr) -> Result<Self, AppError> {
        let runtime = Builder::new_multi_thread().enable_all().build().map_err(AppError::Runtime)?;

        let listener = runtime
            .block_on(TcpListener::bind(addr))
            .map_err(|source| AppError::Listener { addr, source })?;
        let addr = listener.local_addr().map_err(|source| AppError::Listener { addr, source })?;

        Ok(Self { runtime, listener, addr })
    }

    /// Address actually bound; differs from the requested one when port 0 was used.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until the listener fails. Never returns `Ok` under normal operation.
    pub fn serve(self) -> Result<(), AppError> {
        let PingServer { runtime, listener, addr } = self;

        tracing::info!(address = %addr, "Starting ping listener");
        runtime
            .block_on(async move { axum::serve(listener, router()).await })
            .map_err(|source| AppError::Listener { addr, source })
    }
}
