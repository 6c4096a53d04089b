//! Mock control transport for deterministic testing.
//!
//! [`MockControlTransport`] implements the [`ControlTransport`] trait with
//! a queue of scripted responses. Every POST is recorded, so tests can
//! assert on the exact sequence of paths and bodies a protocol engine
//! produced.
//!
//! # Example
//!
//! ```
//! use udap_test_harness::MockControlTransport;
//!
//! let mock = MockControlTransport::new();
//! // The next post will be answered with HTTP 200 and an empty body.
//! mock.push_status(200);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::sync::Mutex;

use udap_core::error::{Error, Result};
use udap_core::transport::{ControlResponse, ControlTransport};

/// One recorded POST through the mock transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Destination address of the post.
    pub addr: Ipv4Addr,
    /// Endpoint path of the post.
    pub path: String,
    /// The request body as sent.
    pub body: String,
}

/// A mock [`ControlTransport`] backed by scripted responses.
///
/// Responses are consumed in order: each `post()` records the request,
/// then pops and returns the front of the queue. Posting with the queue
/// exhausted is a test scripting error and returns [`Error::Protocol`].
///
/// Interior mutability keeps the scripting API usable through the `Arc`
/// the protocol engines take the transport behind.
#[derive(Debug, Default)]
pub struct MockControlTransport {
    responses: Mutex<VecDeque<Result<ControlResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockControlTransport {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an empty-bodied response with the given HTTP status.
    pub fn push_status(&self, status: u16) {
        self.push_response(ControlResponse {
            status,
            body: String::new(),
        });
    }

    /// Script a full response.
    pub fn push_response(&self, response: ControlResponse) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(response));
    }

    /// Script a transport-level failure for the next post.
    pub fn push_error(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All requests posted through this mock, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ControlTransport for MockControlTransport {
    async fn post(&self, addr: Ipv4Addr, path: &str, body: &str) -> Result<ControlResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            addr,
            path: path.to_string(),
            body: body.to_string(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Protocol("no scripted response left".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let mock = MockControlTransport::new();
        mock.push_status(200);
        mock.push_status(401);

        let first = mock
            .post(Ipv4Addr::LOCALHOST, "/a", "one")
            .await
            .unwrap();
        let second = mock
            .post(Ipv4Addr::LOCALHOST, "/b", "two")
            .await
            .unwrap();
        assert_eq!(first.status, 200);
        assert_eq!(second.status, 401);
    }

    #[tokio::test]
    async fn requests_are_recorded() {
        let mock = MockControlTransport::new();
        mock.push_status(200);

        mock.post(Ipv4Addr::new(192, 168, 1, 50), "/udap/api/pairing", "<xml/>")
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].addr, Ipv4Addr::new(192, 168, 1, 50));
        assert_eq!(requests[0].path, "/udap/api/pairing");
        assert_eq!(requests[0].body, "<xml/>");
    }

    #[tokio::test]
    async fn exhausted_queue_is_a_scripting_error() {
        let mock = MockControlTransport::new();
        let result = mock.post(Ipv4Addr::LOCALHOST, "/x", "").await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn scripted_errors_are_returned() {
        let mock = MockControlTransport::new();
        mock.push_error(Error::Transport("refused".into()));
        let result = mock.post(Ipv4Addr::LOCALHOST, "/x", "").await;
        assert!(matches!(result, Err(Error::Transport(_))));
        // The request is still recorded.
        assert_eq!(mock.requests().len(), 1);
    }
}
