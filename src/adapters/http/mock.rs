//! Scripted transport for tests.
//!
//! Queue responses up front, run the code under test, then inspect the
//! recorded requests. Responses are consumed in FIFO order; running out
//! of script is a test bug and fails loudly with a 599.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{HttpRequest, HttpResponse, HttpTransport, TransportError};

type Scripted = Result<HttpResponse, TransportError>;

/// `HttpTransport` that replays a scripted queue and records every
/// request it sees.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Creates an empty (unscripted) transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn with_response(self, status: u16, body: &str) -> Self {
        self.push_response(status, body);
        self
    }

    /// Queues a JSON response.
    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.push_response(status, &body.to_string());
        self
    }

    /// Queues a transport-level failure.
    pub fn with_network_error(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Network(message.to_string())));
        self
    }

    /// Queues a response on an already-shared transport.
    pub fn push_response(&self, status: u16, body: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body.as_bytes().to_vec())));
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(599, "mock script exhausted")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Method;

    #[tokio::test]
    async fn replays_in_fifo_order_and_records() {
        let transport = MockTransport::new()
            .with_response(200, "first")
            .with_response(404, "second");

        let r1 = transport
            .send(HttpRequest::new(Method::Get, "http://x/a"))
            .await
            .unwrap();
        let r2 = transport
            .send(HttpRequest::new(Method::Get, "http://x/b"))
            .await
            .unwrap();

        assert_eq!(r1.status, 200);
        assert_eq!(r2.status, 404);
        let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, ["http://x/a", "http://x/b"]);
    }

    #[tokio::test]
    async fn exhausted_script_fails_loudly() {
        let transport = MockTransport::new();
        let response = transport
            .send(HttpRequest::new(Method::Get, "http://x/a"))
            .await
            .unwrap();
        assert_eq!(response.status, 599);
    }
}
