//! HTTP server

use tokio::net::TcpListener;
use tracing::info;

use crate::{routes::build_router, state::AppState};

/// Binds the router to a socket and serves until shutdown
pub struct ApiServer {
    state: AppState,
    bind_address: String,
}

impl ApiServer {
    /// Create a server for the given state and `host:port`
    pub fn new(state: AppState, bind_address: impl Into<String>) -> Self {
        Self {
            state,
            bind_address: bind_address.into(),
        }
    }

    /// Serve until ctrl-c
    pub async fn run(self) -> anyhow::Result<()> {
        let router = build_router(self.state);
        let listener = TcpListener::bind(self.bind_address.as_str()).await?;
        info!(address = %listener.local_addr()?, "registrar API listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("registrar API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
