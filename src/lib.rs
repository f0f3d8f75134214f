//! Dashboard Aggregation Gateway
//!
//! A thin API gateway that forwards authenticated dashboard reads to an
//! upstream todo service and reshapes the grouped JSON payload into
//! per-category totals.
//!
//! ```text
//! Inbound request
//!     → proxy (build upstream URL, forward credential)
//!     → upstream HTTP call (bounded timeout, no retries)
//!     → dashboard (group-and-count on 2xx; verbatim passthrough otherwise)
//!     → outbound response
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
