//! HTTP control transport backed by [`reqwest`].
//!
//! UDAP televisions expect every control call to be a short-lived POST
//! with a fixed set of headers and `Connection: Close` semantics, so the
//! client is built with connection pooling disabled and each call opens
//! its own request.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;

use udap_core::error::{Error, Result};
use udap_core::transport::{ControlResponse, ControlTransport, CONTROL_PORT};

/// User-Agent header the television firmware expects on control calls.
pub const USER_AGENT: &str = "Linux/2.6.18 UDAP/2.0 NinjaSphere/0.1";

/// Content-Type header for the XML envelope bodies.
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Default per-request timeout for control calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// [`ControlTransport`] implementation posting envelopes over HTTP.
#[derive(Debug, Clone)]
pub struct HttpControlTransport {
    client: reqwest::Client,
    port: u16,
}

impl HttpControlTransport {
    /// Create a transport targeting the standard control port (8080) with
    /// the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a transport with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_port_and_timeout(CONTROL_PORT, timeout)
    }

    /// Create a transport targeting a non-standard control port.
    ///
    /// This variant allows tests to exercise the transport against a mock
    /// HTTP server on an unprivileged loopback port.
    pub fn with_port_and_timeout(port: u16, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            // One request per call; the television closes the connection.
            .pool_max_idle_per_host(0)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(HttpControlTransport { client, port })
    }
}

#[async_trait]
impl ControlTransport for HttpControlTransport {
    async fn post(&self, addr: Ipv4Addr, path: &str, body: &str) -> Result<ControlResponse> {
        let url = format!("http://{addr}:{}{path}", self.port);
        tracing::trace!(url = %url, bytes = body.len(), "Posting control envelope");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE)
            .header("Content-Length", body.len().to_string())
            .header("Connection", "Close")
            .header("User-Agent", USER_AGENT)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Control request failed");
                Error::Transport(format!("POST {url}: {e}"))
            })?;

        let status = response.status().as_u16();
        // The television only sends a meaningful body on success.
        let body = if status == 200 {
            response
                .text()
                .await
                .map_err(|e| Error::Transport(format!("reading response body: {e}")))?
        } else {
            String::new()
        };

        tracing::trace!(url = %url, status = status, "Control response");
        Ok(ControlResponse { status, body })
    }
}
