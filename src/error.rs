//! Error types for the proxy.
//!
//! # Design Decisions
//! - Request-path errors (`ProxyError`) are terminal: each maps to exactly
//!   one HTTP status and is rendered at the handler boundary
//! - Startup errors (`ConfigError`) abort the process before binding

use axum::http::StatusCode;
use thiserror::Error;

/// Failure handling a single inbound request.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Forbidden - Invalid token")]
    Forbidden,

    #[error("Missing OPENAI_API_KEY")]
    MissingCredential,

    #[error("Bad JSON")]
    BadRequest(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Payload Too Large")]
    PayloadTooLarge,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ProxyError {
    /// HTTP status returned to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::Forbidden => StatusCode::FORBIDDEN,
            ProxyError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request could not be sent or no response head arrived.
    #[error("{0}")]
    Send(String),

    /// Response head arrived but the body could not be read.
    #[error("failed to read upstream response: {0}")]
    ReadBody(String),
}

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listener.bind_address {0:?}")]
    BindAddress(String),

    #[error("invalid upstream url {url:?}: {reason}")]
    UpstreamUrl { url: String, reason: String },

    #[error("handler.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("unknown observability.log_level {0:?}")]
    LogLevel(String),
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
