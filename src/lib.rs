//! Edge proxy for a single OpenAI-style JSON endpoint.
//!
//! Browser clients call the proxy instead of the upstream API, so the API
//! key stays on the server. The proxy checks the method and an optional
//! shared token, forwards the JSON body with the key attached, and relays
//! the upstream response with permissive CORS headers.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use error::{ConfigError, ProxyError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
