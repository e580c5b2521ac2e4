//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler, server, upstream client
//!     → tracing events (status codes, model, masked token presence)
//!     → per-request span (method, path, request ID)
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Secret values are never recorded as fields
//! - Request ID flows through every event via the request span

pub mod logging;
