//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use openai_edge_proxy::config::{Credentials, ProxyConfig};
use openai_edge_proxy::upstream::HttpUpstream;
use openai_edge_proxy::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
struct MockState {
    captured: Arc<Mutex<Vec<Captured>>>,
    status: StatusCode,
    body: &'static str,
}

/// Handle to a running mock upstream.
pub struct MockUpstream {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

/// Start a mock upstream that records requests and answers with a fixed
/// status and JSON body.
pub async fn start_mock_upstream(status: StatusCode, body: &'static str) -> MockUpstream {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        captured: captured.clone(),
        status,
        body,
    };

    let app = Router::new()
        .route("/{*path}", post(record))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, captured }
}

async fn record(
    State(state): State<MockState>,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.captured.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        headers,
        body,
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Config pointing at `upstream_url` with the given credentials.
pub fn proxy_config(upstream_url: String, shared_token: Option<&str>, api_key: Option<&str>) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.url = Some(upstream_url);
    config.credentials = Credentials::new(
        shared_token.map(str::to_string),
        api_key.map(str::to_string),
    );
    config
}

/// Start the proxy on an ephemeral port. Returns its base URL.
pub async fn start_proxy(config: ProxyConfig, shutdown: &Shutdown) -> String {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let server = HttpServer::with_upstream(config, Arc::new(HttpUpstream::new(client))).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    format!("http://{}", addr)
}

/// Client that bypasses any system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
