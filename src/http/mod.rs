//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → handler.rs (method gate, token, credentials, body parse, forward)
//!     → [upstream client performs the outbound call]
//!     → response.rs (relay or render error) + cors.rs
//!     → Send to client
//! ```

pub mod cors;
pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use handler::ProxyHandler;
pub use request::X_REQUEST_ID;
pub use server::HttpServer;
