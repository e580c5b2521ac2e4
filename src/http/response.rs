//! Response construction.
//!
//! # Responsibilities
//! - Relay the buffered upstream response (status, content type, body)
//! - Render `ProxyError` in the configured error format
//! - Attach CORS headers to everything leaving the handler
//!
//! # Design Decisions
//! - Upstream bodies are relayed byte-for-byte, never reparsed
//! - Transport failures always use the structured `proxy_error` body so
//!   clients can tell them apart from upstream API errors

use axum::{
    body::Body,
    http::{
        header::{ALLOW, CONTENT_TYPE},
        HeaderValue,
    },
    response::Response,
};
use serde_json::json;

use crate::config::ErrorFormat;
use crate::error::ProxyError;
use crate::http::cors;
use crate::upstream::UpstreamResponse;

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

fn text_plain() -> HeaderValue {
    HeaderValue::from_static("text/plain; charset=utf-8")
}

/// Mirror the upstream response to the caller.
pub fn relay(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = upstream.status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, upstream.content_type.unwrap_or_else(application_json));
    cors::apply(response.headers_mut());
    response
}

/// Render an error for the caller.
pub fn error(err: &ProxyError, format: ErrorFormat) -> Response {
    let (body, content_type) = match (err, format) {
        (ProxyError::Upstream(e), _) => (
            json!({ "error": { "message": e.to_string(), "type": "proxy_error" } }).to_string(),
            application_json(),
        ),
        (_, ErrorFormat::Json) => (json!({ "error": err.to_string() }).to_string(), application_json()),
        (_, ErrorFormat::Plain) => (err.to_string(), text_plain()),
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = err.status();
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, content_type);
    if matches!(err, ProxyError::MethodNotAllowed) {
        headers.insert(ALLOW, HeaderValue::from_static(cors::ALLOW_METHODS));
    }
    cors::apply(headers);
    response
}
