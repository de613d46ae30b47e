//! Per-connection handler: read one request, route it, write the response.

use std::net::SocketAddr;
use std::time::Duration;

use hexrgb_config::ServerConfig;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::http::{read_request, write_response, RequestError, Response};
use crate::protocol::{ErrorBody, MSG_BAD_REQUEST};
use crate::routes::route;

/// Handle a single connection. Errors are logged, never propagated.
pub async fn handle_connection<S>(mut stream: S, addr: SocketAddr, config: &ServerConfig)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let response = match read_request(&mut stream, config.max_request_bytes, timeout).await {
        Ok(request) => {
            let response = route(&request, config);
            tracing::info!(
                peer = %addr,
                method = %request.method,
                path = %request.path,
                status = response.status,
                "request"
            );
            response
        }
        Err(RequestError::Closed) => {
            tracing::debug!(peer = %addr, "Connection closed before request");
            return;
        }
        Err(RequestError::Io(e)) => {
            tracing::debug!(peer = %addr, error = %e, "Read error");
            return;
        }
        Err(e @ RequestError::Timeout) => {
            tracing::warn!(peer = %addr, error = %e, "Rejecting request");
            Response::json(408, &ErrorBody::new(MSG_BAD_REQUEST))
        }
        Err(e @ RequestError::TooLarge(_)) => {
            tracing::warn!(peer = %addr, error = %e, "Rejecting request");
            Response::json(431, &ErrorBody::new(MSG_BAD_REQUEST))
        }
        Err(e @ RequestError::Malformed(_)) => {
            tracing::warn!(peer = %addr, error = %e, "Rejecting request");
            Response::json(400, &ErrorBody::new(MSG_BAD_REQUEST))
        }
    };

    if let Err(e) = write_response(&mut stream, &response).await {
        tracing::debug!(peer = %addr, error = %e, "Write error");
    }
}
