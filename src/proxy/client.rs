//! Outbound upstream call.
//!
//! # Responsibilities
//! - Perform exactly one HTTP GET against the built upstream URL
//! - Forward the caller's credential byte-for-byte
//! - Capture the upstream status, headers, and body verbatim
//! - Bound the call with the configured timeout
//!
//! # Design Decisions
//! - No retries and no circuit breaker: a failed upstream call surfaces
//!   immediately so the caller observes the same failure the gateway did
//! - The body is buffered (bounded) because the dashboard handler may need
//!   to reshape it before answering

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::time::Duration;
use tokio::time;

use crate::error::GatewayError;

/// Raw result of the upstream call, created per-request and never persisted.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: axum::body::Bytes,
}

/// HTTP client for the upstream todo service.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client<HttpConnector, Body>,
    timeout: Duration,
    max_response_bytes: usize,
}

impl UpstreamClient {
    pub fn new(timeout: Duration, max_response_bytes: usize) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            timeout,
            max_response_bytes,
        }
    }

    /// Issue a single GET to `url`, forwarding `authorization` unmodified.
    ///
    /// Connection failures map to [`GatewayError::Unavailable`]; exceeding
    /// the configured bound maps to [`GatewayError::UpstreamTimeout`].
    pub async fn get(
        &self,
        url: &str,
        authorization: &HeaderValue,
    ) -> Result<UpstreamResponse, GatewayError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, authorization.clone())
            .body(Body::empty())?;

        let response = match time::timeout(self.timeout, self.client.request(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                tracing::warn!(url = %url, error = %e, "Upstream call failed");
                return Err(GatewayError::Unavailable(e.to_string()));
            }
            Err(_) => {
                tracing::warn!(url = %url, timeout = ?self.timeout, "Upstream call timed out");
                return Err(GatewayError::UpstreamTimeout(self.timeout));
            }
        };

        let (parts, body) = response.into_parts();
        let body = time::timeout(
            self.timeout,
            axum::body::to_bytes(Body::new(body), self.max_response_bytes),
        )
        .await
        .map_err(|_| GatewayError::UpstreamTimeout(self.timeout))?
        .map_err(|e| GatewayError::Unavailable(format!("failed to read upstream body: {e}")))?;

        tracing::debug!(
            url = %url,
            status = %parts.status,
            body_bytes = body.len(),
            "Upstream responded"
        );

        Ok(UpstreamResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        })
    }
}
