//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming POST:
//!     → token.rs (x-proxy-token vs PROXY_SHARED_TOKEN)
//!     → Pass to credential check and forwarding
//!
//! Secrets (API key, shared token):
//!     → secret.rs (masked Debug, presence markers for logs)
//! ```
//!
//! # Design Decisions
//! - Fail closed: a configured token must match exactly
//! - Secret values never appear in logs or client responses

pub mod secret;
pub mod token;

pub use secret::{presence, Secret};
pub use token::{verify_shared_token, X_PROXY_TOKEN};
