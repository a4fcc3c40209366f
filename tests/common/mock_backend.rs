//! Content API stand-in for HTTP-level tests.
//!
//! Every request under any path is recorded and answered with the next
//! queued response, or `{"ok": true}` once the queue is empty.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

#[derive(Default)]
struct Exchange {
    requests: Vec<CapturedRequest>,
    replies: VecDeque<MockResponse>,
}

type Shared = Arc<Mutex<Exchange>>;

pub struct MockBackend {
    pub addr: SocketAddr,
    exchange: Shared,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// Serves on an ephemeral local port until dropped.
    pub async fn start() -> Self {
        let exchange = Shared::default();
        let app = Router::new()
            .route("/{*path}", any(answer))
            .with_state(exchange.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock content API");
        let addr = listener.local_addr().expect("listener has no address");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            addr,
            exchange,
            server,
        }
    }

    pub async fn enqueue_response(&self, response: MockResponse) {
        self.exchange.lock().replies.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.exchange.lock().requests.clone()
    }

    /// API prefix clients should be configured with.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn answer(State(exchange): State<Shared>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default().to_vec();
    let headers = parts
        .headers
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_str().unwrap_or("").to_string()))
        .collect();

    let reply = {
        let mut exchange = exchange.lock();
        exchange.requests.push(CapturedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            headers,
            body,
        });
        exchange
            .replies
            .pop_front()
            .unwrap_or_else(|| MockResponse::json(r#"{"ok": true}"#))
    };

    Response::builder()
        .status(StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(reply.body))
        .expect("static response parts are valid")
}
