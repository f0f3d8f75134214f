//! Upstream proxying subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound query parameters
//!     → query.rs (build upstream URL, fixed parameter order)
//!     → client.rs (single GET, credential passthrough, bounded timeout)
//!     → UpstreamResponse (status/headers/body captured verbatim)
//! ```
//!
//! # Design Decisions
//! - The credential is an opaque passthrough; the gateway never parses it
//! - One outbound call per inbound request, no retries
//! - Components here know nothing about routing or tracing

pub mod client;
pub mod query;

pub use client::{UpstreamClient, UpstreamResponse};
pub use query::{build_upstream_url, DashboardQuery};
