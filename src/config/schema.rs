//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.
//! Credentials are the exception: they come from the process environment
//! only and are skipped by serde.

use serde::{Deserialize, Serialize};

use crate::security::Secret;

/// Chat Completions endpoint.
pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Responses endpoint.
pub const RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

/// Environment variable holding the shared proxy token.
pub const SHARED_TOKEN_ENV: &str = "PROXY_SHARED_TOKEN";

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream endpoint selection.
    pub upstream: UpstreamConfig,

    /// Request handling behavior.
    pub handler: HandlerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Secrets injected at runtime. Never read from or written to files.
    #[serde(skip)]
    pub credentials: Credentials,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Which upstream API the proxy fronts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamApi {
    #[default]
    ChatCompletions,
    Responses,
}

impl UpstreamApi {
    pub fn url(self) -> &'static str {
        match self {
            UpstreamApi::ChatCompletions => CHAT_COMPLETIONS_URL,
            UpstreamApi::Responses => RESPONSES_URL,
        }
    }
}

/// Upstream configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Preset endpoint.
    pub api: UpstreamApi,

    /// Explicit endpoint; takes precedence over `api`.
    pub url: Option<String>,
}

impl UpstreamConfig {
    /// The endpoint every forwarded request is sent to.
    pub fn endpoint(&self) -> &str {
        self.url.as_deref().unwrap_or(self.api.url())
    }
}

/// Body format for errors raised before the upstream is contacted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFormat {
    /// `{"error": "<message>"}` with `application/json`.
    #[default]
    Json,
    /// The bare message with `text/plain`.
    Plain,
}

/// Request handling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub error_format: ErrorFormat,

    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            error_format: ErrorFormat::Json,
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Secrets the proxy holds on behalf of its callers.
///
/// Empty values are treated as absent: an empty shared token means open
/// mode, an empty API key means the key is missing.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub shared_token: Option<Secret>,
    pub api_key: Option<Secret>,
}

impl Credentials {
    pub fn new(shared_token: Option<String>, api_key: Option<String>) -> Self {
        Self {
            shared_token: shared_token.and_then(Secret::non_empty),
            api_key: api_key.and_then(Secret::non_empty),
        }
    }

    /// Read `PROXY_SHARED_TOKEN` and `OPENAI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(SHARED_TOKEN_ENV).ok(),
            std::env::var(API_KEY_ENV).ok(),
        )
    }
}
