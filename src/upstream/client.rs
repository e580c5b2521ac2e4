//! reqwest-backed upstream client.

use axum::http::header::CONTENT_TYPE;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::error::UpstreamError;
use crate::upstream::{Upstream, UpstreamRequest, UpstreamResponse};

/// Sends forwarded requests over a pooled reqwest client.
///
/// No timeout is configured; the client's defaults apply.
#[derive(Clone, Default)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn send_inner(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let response = self
            .client
            .post(request.url)
            .bearer_auth(request.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .body(request.body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Upstream request failed");
                UpstreamError::Send(e.without_url().to_string())
            })?;

        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = ?e, status = %status, "Reading upstream body failed");
            UpstreamError::ReadBody(e.without_url().to_string())
        })?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

impl Upstream for HttpUpstream {
    fn send(&self, request: UpstreamRequest) -> BoxFuture<'_, Result<UpstreamResponse, UpstreamError>> {
        self.send_inner(request).boxed()
    }
}
