//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router dispatching every path and method to the handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::error::ConfigError;
use crate::http::handler::ProxyHandler;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::upstream::{HttpUpstream, Upstream};

/// Application state injected into handlers.
pub type AppState = Arc<ProxyHandler>;

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a server forwarding through a default reqwest client.
    pub fn new(config: ProxyConfig) -> Result<Self, ConfigError> {
        Self::with_upstream(config, Arc::new(HttpUpstream::default()))
    }

    /// Create a server forwarding through the given upstream.
    pub fn with_upstream(config: ProxyConfig, upstream: Arc<dyn Upstream>) -> Result<Self, ConfigError> {
        let handler = Arc::new(ProxyHandler::new(&config, upstream)?);
        let router = Self::build_router(handler);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id(request),
                    )
                }),
            )
            .layer(propagate_request_id_layer());

        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(middleware)
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.endpoint(),
            error_format = ?self.config.handler.error_format,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// The router, for driving the server without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn proxy_handler(State(handler): State<AppState>, request: Request<Body>) -> Response {
    handler.handle(request).await
}
