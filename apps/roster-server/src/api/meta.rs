use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use utoipa::OpenApi as _;

use crate::{responses, AppState};

/// Health probe.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "Meta",
    operation_id = "healthz",
    responses(
        (status = 200, description = "Service healthy", body = serde_json::Value)
    )
)]
pub async fn healthz() -> impl IntoResponse {
    responses::json_ok(json!({"ok": true}))
}

/// Service metadata and endpoints index.
#[utoipa::path(
    get,
    path = "/about",
    tag = "Meta",
    operation_id = "about",
    responses(
        (status = 200, description = "Service metadata", body = serde_json::Value)
    )
)]
pub async fn about(State(state): State<AppState>) -> impl IntoResponse {
    let bind = std::env::var("ROSTER_BIND").unwrap_or_else(|_| "127.0.0.1".into());
    let port: u16 = std::env::var("ROSTER_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8090);
    let endpoints = state.endpoints();
    responses::json_ok(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "http": {"bind": bind, "port": port},
        "counts": {"total": endpoints.len()},
        "endpoints": endpoints,
    }))
}

/// Generated OpenAPI document.
#[utoipa::path(
    get,
    path = "/spec/openapi.json",
    tag = "Meta",
    operation_id = "openapi_json",
    responses(
        (status = 200, description = "OpenAPI 3.1 document", body = serde_json::Value)
    )
)]
pub async fn openapi_json() -> impl IntoResponse {
    Json(crate::openapi::ApiDoc::openapi())
}
