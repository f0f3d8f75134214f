//! Dashboard aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! 2xx upstream JSON body
//!     → aggregate.rs (group-and-count by category)
//!     → Vec<CategoryTotal> (insertion-ordered)
//! ```
//!
//! Non-2xx upstream responses bypass this subsystem entirely.

pub mod aggregate;

pub use aggregate::{aggregate, CategoryTotal, DashboardPayload};
