//! Shared-token access check.
//!
//! A caller proves it may use the proxy by sending the token configured in
//! `PROXY_SHARED_TOKEN` in the `x-proxy-token` header. With no token
//! configured every caller is accepted (open mode).

use axum::http::{HeaderMap, HeaderName};

use crate::error::ProxyError;
use crate::security::secret::{presence, Secret};

/// Header carrying the caller's shared token.
pub const X_PROXY_TOKEN: HeaderName = HeaderName::from_static("x-proxy-token");

/// Compare the caller's token against the expected one.
///
/// A missing or non-UTF-8 header counts as the empty string.
pub fn verify_shared_token(expected: Option<&Secret>, headers: &HeaderMap) -> Result<(), ProxyError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let got = headers
        .get(&X_PROXY_TOKEN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if got == expected.expose() {
        return Ok(());
    }

    tracing::warn!(
        expected = presence(true),
        got = presence(!got.is_empty()),
        "Shared token mismatch"
    );
    Err(ProxyError::Forbidden)
}
