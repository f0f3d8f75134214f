//! Gateway failure taxonomy.
//!
//! # Responsibilities
//! - Classify everything that can go wrong between accepting a request
//!   and answering it
//! - Convert each failure into a structured JSON error body at the
//!   handler boundary (one root conversion, nothing crashes the process)
//!
//! # Design Decisions
//! - Upstream non-2xx responses are NOT errors: their status and body are
//!   passed through verbatim so the caller sees exactly what the upstream
//!   said. Only transport-level failures and gateway-side faults land here.
//! - Error bodies carry the string form of the failure, nothing more;
//!   full detail goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Everything the gateway itself can fail with.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The inbound query string could not be decoded.
    ///
    /// Well-formed but semantically odd values (e.g. a non-boolean `done`)
    /// are forwarded to the upstream unchanged; validation ownership
    /// belongs there.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No `Authorization` header on the inbound request.
    #[error("missing authorization header")]
    MissingCredential,

    /// The outbound call could not connect or failed mid-flight.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// The outbound call exceeded the configured per-call timeout.
    #[error("upstream timed out after {0:?}")]
    UpstreamTimeout(Duration),

    /// Any other fault while building or translating the request.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl GatewayError {
    /// HTTP status this failure maps to at the boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            GatewayError::MissingCredential => StatusCode::UNAUTHORIZED,
            GatewayError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            GatewayError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Unexpected(format!("malformed upstream payload: {e}"))
    }
}

impl From<axum::http::Error> for GatewayError {
    fn from(e: axum::http::Error) -> Self {
        GatewayError::Unexpected(format!("failed to build upstream request: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GatewayError::InvalidQuery("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::MissingCredential.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::Unavailable("refused".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::UpstreamTimeout(Duration::from_secs(5)).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            GatewayError::Unexpected("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
