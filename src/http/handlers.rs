//! Dashboard endpoint handler.
//!
//! # Responsibilities
//! - Translate the inbound filtered request into a single upstream call
//! - Aggregate the upstream payload into per-category totals on success
//! - Propagate upstream error status/body verbatim
//!
//! # Design Decisions
//! - The upstream status code decides whether aggregation applies; the body
//!   shape is never used to guess
//! - Every failure is converted to a structured JSON body at this boundary;
//!   nothing bubbles past it

use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;

use crate::dashboard::{aggregate, DashboardPayload};
use crate::error::GatewayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::proxy::{build_upstream_url, DashboardQuery, UpstreamResponse};

/// `GET /api/dashboards/totalCategory`
///
/// Root boundary for the dashboard request: all failures are converted to
/// responses here so per-request metrics always get recorded.
pub async fn total_category(
    state: State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();

    let response = match forward_and_aggregate(state, query, headers).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                GatewayError::Unavailable(_) => metrics::record_upstream_error("unavailable"),
                GatewayError::UpstreamTimeout(_) => metrics::record_upstream_error("timeout"),
                _ => {}
            }
            e.into_response()
        }
    };

    metrics::record_request("GET", response.status().as_u16(), start);
    response
}

async fn forward_and_aggregate(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let Query(query) = query.map_err(|e| GatewayError::InvalidQuery(e.body_text()))?;

    // Opaque passthrough: forwarded byte-for-byte, never parsed here.
    let authorization = headers
        .get(header::AUTHORIZATION)
        .ok_or(GatewayError::MissingCredential)?;

    let url = build_upstream_url(&state.config.upstream.base_url, &query);
    tracing::debug!(url = %url, "Forwarding dashboard request");

    let upstream = state.upstream.get(&url, authorization).await?;

    if upstream.status.is_success() {
        let payload: DashboardPayload = serde_json::from_slice(&upstream.body)?;
        let totals = aggregate(&payload);
        Ok((StatusCode::OK, Json(totals)).into_response())
    } else {
        tracing::debug!(status = %upstream.status, "Passing upstream error through");
        Ok(passthrough(upstream))
    }
}

/// Reproduce the upstream response verbatim for the caller.
///
/// Hop-by-hop headers are dropped because the body was buffered and is
/// re-framed on the way out.
fn passthrough(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = upstream.status;
    for (name, value) in upstream.headers.iter() {
        if name == header::CONNECTION || name == header::TRANSFER_ENCODING {
            continue;
        }
        response.headers_mut().append(name.clone(), value.clone());
    }
    response
}
