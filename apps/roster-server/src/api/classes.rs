use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::PlayerClass;

use crate::AppState;

/// The fixed class catalog, in canonical order.
#[utoipa::path(
    get,
    path = "/classes",
    tag = "Classes",
    operation_id = "classes_list",
    responses(
        (status = 200, description = "Whitelisted class names", body = serde_json::Value)
    )
)]
pub async fn classes_list() -> impl IntoResponse {
    let names: Vec<&'static str> = PlayerClass::ALL.iter().map(|c| c.as_str()).collect();
    Json(names)
}

/// Player count per class, zero-filled over the whole catalog.
#[utoipa::path(
    get,
    path = "/classes/distribution",
    tag = "Classes",
    operation_id = "classes_distribution",
    responses(
        (status = 200, description = "Count per catalog class", body = serde_json::Value)
    )
)]
pub async fn classes_distribution(State(state): State<AppState>) -> impl IntoResponse {
    let roster = state.roster().lock().await;
    Json(roster.class_distribution())
}
