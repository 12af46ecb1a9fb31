//! An in-process webhook endpoint for exercising the real binary.
//!
//! Each [`StubServer`] runs an axum app on its own thread and runtime, answers
//! every request with a fixed status and body, and hands the request back to
//! the test over a channel.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::oneshot;

/// How long a test waits for the binary to reach the endpoint.
const CAPTURE_TIMEOUT: Duration = Duration::from_secs(15);
/// How long a test waits before concluding nothing was sent.
const QUIET_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    requests: mpsc::Sender<CapturedRequest>,
}

async fn capture(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let _ = state.requests.send(CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });
    (state.status, state.body)
}

pub struct StubServer {
    addr: SocketAddr,
    requests: mpsc::Receiver<CapturedRequest>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Serves on an ephemeral local port, answering with `status` and `body`.
    pub fn start(status: u16, body: &'static str) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        listener.set_nonblocking(true).unwrap();

        let (tx, requests) = mpsc::channel();
        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        let state = StubState {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            requests: tx,
        };
        let app = Router::new().fallback(capture).with_state(state);

        let handle = thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .unwrap();
            });
        });

        Self {
            addr,
            requests,
            shutdown: Some(shutdown),
            handle: Some(handle),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/hook", self.addr)
    }

    /// The next request the endpoint received. Panics if none arrives in time.
    pub fn captured(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(CAPTURE_TIMEOUT)
            .expect("webhook was never called")
    }

    /// Panics if anything reached the endpoint.
    pub fn assert_untouched(&self) {
        if let Ok(request) = self.requests.recv_timeout(QUIET_PERIOD) {
            panic!("expected no request, got {} {}", request.method, request.path);
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
