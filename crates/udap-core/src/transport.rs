//! Control-channel transport trait.
//!
//! The [`ControlTransport`] trait abstracts the HTTP POST exchange with a
//! television's control endpoint. The protocol engine (pairing, command
//! dispatch) operates on this trait rather than on an HTTP client
//! directly, enabling both real control and deterministic unit testing
//! with `MockControlTransport` from the `udap-test-harness` crate.

use async_trait::async_trait;
use std::net::Ipv4Addr;

use crate::error::Result;

/// TCP port of the television's HTTP control endpoint.
pub const CONTROL_PORT: u16 = 8080;

/// Status and body of one control-endpoint exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlResponse {
    /// HTTP status code returned by the television.
    pub status: u16,
    /// Response body text. Empty for non-200 responses.
    pub body: String,
}

impl ControlResponse {
    /// Whether the television accepted the request (HTTP 200).
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Asynchronous HTTP control channel to a television.
///
/// Each call is one self-contained request: implementations must not
/// assume connection reuse, and the television expects `Connection: Close`
/// semantics. Protocol-level concerns (envelope bodies, re-pair-and-retry)
/// are handled by the engines that consume this trait.
#[async_trait]
pub trait ControlTransport: Send + Sync {
    /// POST an XML envelope to `http://{addr}:8080{path}`.
    ///
    /// Returns the response status and (for HTTP 200) the body text.
    /// Transport-level failures are reported as
    /// [`Error::Transport`](crate::error::Error::Transport).
    async fn post(&self, addr: Ipv4Addr, path: &str, body: &str) -> Result<ControlResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_is_ok_only_for_200() {
        let ok = ControlResponse {
            status: 200,
            body: "<envelope/>".into(),
        };
        assert!(ok.is_ok());

        for status in [0u16, 301, 401, 404, 500] {
            let resp = ControlResponse {
                status,
                body: String::new(),
            };
            assert!(!resp.is_ok(), "status {status} must not count as success");
        }
    }
}
