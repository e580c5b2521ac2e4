//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! Validated request (handler)
//!     → UpstreamRequest (fixed URL, bearer key, JSON body)
//!     → Upstream::send (one attempt, fully buffered)
//!     → UpstreamResponse (status, content type, raw body)
//!     → relayed by the handler
//! ```
//!
//! # Design Decisions
//! - The handler depends on the `Upstream` trait, not on reqwest, so tests
//!   can substitute an in-memory double
//! - No retries, no streaming, no timeout override

pub mod client;

use axum::http::{HeaderValue, StatusCode};
use axum::body::Bytes;
use futures_util::future::BoxFuture;
use url::Url;

use crate::error::UpstreamError;
use crate::security::Secret;

pub use client::HttpUpstream;

/// Outbound request built from a validated inbound one.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub url: Url,
    pub api_key: Secret,
    /// Re-serialized JSON payload.
    pub body: Vec<u8>,
}

/// Buffered upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// Capability to perform the single outbound call.
pub trait Upstream: Send + Sync {
    fn send(&self, request: UpstreamRequest) -> BoxFuture<'_, Result<UpstreamResponse, UpstreamError>>;
}
