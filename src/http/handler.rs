//! The proxy handler.
//!
//! Every inbound request walks the same fixed sequence:
//!
//! ```text
//! OPTIONS            → 204 preflight
//! not POST           → 405
//! token mismatch     → 403
//! no API key         → 500
//! body not JSON      → 400 (413 if over the size cap)
//! forward upstream   → relay status/body/content type
//! transport failure  → 500 proxy_error
//! ```
//!
//! The handler holds no mutable state; concurrent requests share it
//! through an `Arc`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
};
use serde_json::Value;
use url::Url;

use crate::config::{Credentials, ErrorFormat, ProxyConfig};
use crate::error::{ConfigError, ProxyError, ValidationError};
use crate::http::{cors, response};
use crate::security::{presence, verify_shared_token};
use crate::upstream::{Upstream, UpstreamRequest, UpstreamResponse};

/// Stateless request → response function with injected credentials and
/// one outbound HTTP capability.
pub struct ProxyHandler {
    endpoint: Url,
    credentials: Credentials,
    error_format: ErrorFormat,
    max_body_size: usize,
    upstream: Arc<dyn Upstream>,
}

impl ProxyHandler {
    pub fn new(config: &ProxyConfig, upstream: Arc<dyn Upstream>) -> Result<Self, ConfigError> {
        let raw = config.upstream.endpoint();
        let endpoint = Url::parse(raw).map_err(|e| {
            ConfigError::Validation(vec![ValidationError::UpstreamUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            }])
        })?;

        Ok(Self {
            endpoint,
            credentials: config.credentials.clone(),
            error_format: config.handler.error_format,
            max_body_size: config.handler.max_body_size,
            upstream,
        })
    }

    /// Upstream URL every request is forwarded to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Handle one request. Never fails: errors become responses.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        if *request.method() == Method::OPTIONS {
            return cors::preflight();
        }

        match self.forward(request).await {
            Ok(upstream) => response::relay(upstream),
            Err(err) => {
                if err.status().is_server_error() {
                    tracing::error!(error = %err, status = %err.status(), "Request failed");
                } else {
                    tracing::warn!(error = %err, status = %err.status(), "Request rejected");
                }
                response::error(&err, self.error_format)
            }
        }
    }

    async fn forward(&self, request: Request<Body>) -> Result<UpstreamResponse, ProxyError> {
        let (parts, body) = request.into_parts();

        if parts.method != Method::POST {
            return Err(ProxyError::MethodNotAllowed);
        }

        verify_shared_token(self.credentials.shared_token.as_ref(), &parts.headers)?;

        let Some(api_key) = self.credentials.api_key.clone() else {
            tracing::error!("OPENAI_API_KEY not set");
            return Err(ProxyError::MissingCredential);
        };

        let payload = self.read_payload(body).await?;
        let model = payload.get("model").and_then(Value::as_str).unwrap_or("<unset>");

        tracing::info!(
            endpoint = %self.endpoint,
            model = %model,
            proxy_token = presence(self.credentials.shared_token.is_some()),
            "Forwarding request upstream"
        );

        let body = serde_json::to_vec(&payload).map_err(|e| ProxyError::BadRequest(Box::new(e)))?;
        let upstream = self
            .upstream
            .send(UpstreamRequest {
                url: self.endpoint.clone(),
                api_key,
                body,
            })
            .await?;

        tracing::info!(status = %upstream.status, "Upstream responded");
        Ok(upstream)
    }

    async fn read_payload(&self, body: Body) -> Result<Value, ProxyError> {
        let bytes = axum::body::to_bytes(body, self.max_body_size)
            .await
            .map_err(|e| {
                if is_length_limit(&e) {
                    ProxyError::PayloadTooLarge
                } else {
                    ProxyError::BadRequest(Box::new(e))
                }
            })?;

        serde_json::from_slice(&bytes).map_err(|e| ProxyError::BadRequest(Box::new(e)))
    }
}

fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.to_string().contains("length limit exceeded") {
            return true;
        }
        source = e.source();
    }
    false
}
