//! Listener and accept loop.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use hexrgb_common::{HexRgbError, Result};
use hexrgb_config::ServerConfig;
use tokio::net::TcpListener;

use crate::connection::handle_connection;

/// A bound HTTP server. Nothing is served until [`Server::run_until`].
pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Bind to `config.bind_addr()`. Port 0 picks an ephemeral port.
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        let addr = config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| HexRgbError::Other(format!("failed to bind {addr}: {e}")))?;
        Ok(Self::from_listener(listener, config))
    }

    pub fn from_listener(listener: TcpListener, config: ServerConfig) -> Self {
        Self {
            listener,
            config: Arc::new(config),
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until `shutdown` resolves. Connections already
    /// accepted finish on their own tasks.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutting down");
                    break;
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, addr)) => {
                        let config = Arc::clone(&self.config);
                        tokio::spawn(async move {
                            handle_connection(stream, addr, &config).await;
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "TCP accept error");
                    }
                },
            }
        }
    }
}
