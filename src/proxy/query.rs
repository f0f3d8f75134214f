//! Upstream query construction.
//!
//! # Responsibilities
//! - Model the optional filter parameters the dashboard endpoint accepts
//! - Serialize present parameters into a well-formed upstream URL
//!
//! # Design Decisions
//! - Parameters are appended in a fixed declared order so the produced URL
//!   is deterministic regardless of which subset was supplied
//! - Absent parameters are omitted entirely, never sent as empty strings
//! - `done` is forwarded as an opaque string; the upstream owns validation
//!   of its values

use serde::Deserialize;
use url::form_urlencoded;

/// Optional filter parameters accepted by the dashboard endpoint.
///
/// All fields are pass-through strings; the gateway never interprets them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub category_name: Option<String>,
    pub person_id: Option<String>,
    pub planned_end_date: Option<String>,
    pub done: Option<String>,
}

impl DashboardQuery {
    /// Present parameters as (key, value) pairs in declared order.
    fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("categoryName", self.category_name.as_deref()),
            ("personId", self.person_id.as_deref()),
            ("plannedEndDate", self.planned_end_date.as_deref()),
            ("done", self.done.as_deref()),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
    }
}

/// Build the outbound URL from the base URL and the supplied filters.
///
/// Returns `base_url` unchanged (no trailing `?`) when no filter is present.
pub fn build_upstream_url(base_url: &str, query: &DashboardQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query.pairs() {
        serializer.append_pair(key, value);
    }
    let query_string = serializer.finish();

    if query_string.is_empty() {
        base_url.to_string()
    } else {
        format!("{}?{}", base_url, query_string)
    }
}
