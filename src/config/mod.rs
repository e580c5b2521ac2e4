//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → environment (PROXY_SHARED_TOKEN, OPENAI_API_KEY) → Credentials
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with the handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Secrets never live in the config file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::{
    Credentials, ErrorFormat, HandlerConfig, ListenerConfig, LogFormat, ObservabilityConfig,
    ProxyConfig, UpstreamApi, UpstreamConfig,
};
pub use validation::validate_config;
