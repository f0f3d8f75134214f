//! Actuator endpoints.
//!
//! Spring-Boot-style management surface so the gateway plugs into the same
//! health probing and scrape discovery the surrounding services use.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::http::server::AppState;

/// `GET /actuator/health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

/// `GET /actuator/info`
pub async fn info() -> Json<Value> {
    Json(json!({}))
}

/// `GET /actuator` — HAL-style index of the management endpoints.
pub async fn index(State(state): State<AppState>) -> Json<Value> {
    let base = format!("http://{}/actuator", state.config.listener.bind_address);
    Json(json!({
        "_links": {
            "self": { "href": base, "templated": false },
            "health": { "href": format!("{}/health", base), "templated": false },
            "info": { "href": format!("{}/info", base), "templated": false },
        }
    }))
}
