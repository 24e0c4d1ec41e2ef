use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::{Player, PlayerId, RosterError};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{responses, spreadsheet, AppState};
use roster_topics as topics;

#[derive(Deserialize, ToSchema)]
pub struct PlayerCreateReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PlayerUpdateReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

/// All players, in creation order.
#[utoipa::path(
    get,
    path = "/players",
    tag = "Players",
    operation_id = "players_list",
    responses(
        (status = 200, description = "Players in creation order", body = serde_json::Value)
    )
)]
pub async fn players_list(State(state): State<AppState>) -> impl IntoResponse {
    let roster = state.roster().lock().await;
    let players: Vec<Player> = roster.players().iter().cloned().collect();
    Json(players)
}

#[utoipa::path(
    post,
    path = "/players",
    tag = "Players",
    operation_id = "players_create",
    request_body = PlayerCreateReq,
    responses(
        (status = 201, description = "Created player", body = serde_json::Value),
        (status = 400, description = "Missing field or unknown class", body = serde_json::Value),
        (status = 409, description = "Name already taken", body = serde_json::Value)
    )
)]
pub async fn players_create(
    State(state): State<AppState>,
    Json(req): Json<PlayerCreateReq>,
) -> Response {
    let mut roster = state.roster().lock().await;
    let name = req.name.as_deref().unwrap_or("");
    let class = req.class.as_deref().unwrap_or("");
    match roster.create_player(name, class) {
        Ok(player) => {
            state.bus().publish(topics::TOPIC_PLAYERS_CREATED, &player);
            (StatusCode::CREATED, Json(player)).into_response()
        }
        Err(err) => responses::roster_error(&err),
    }
}

#[utoipa::path(
    get,
    path = "/players/{id}",
    tag = "Players",
    operation_id = "players_get",
    params(("id" = u64, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player", body = serde_json::Value),
        (status = 404, description = "Unknown player", body = serde_json::Value)
    )
)]
pub async fn players_get(State(state): State<AppState>, Path(id): Path<PlayerId>) -> Response {
    let roster = state.roster().lock().await;
    match roster.players().get(id) {
        Some(player) => Json(player.clone()).into_response(),
        None => responses::roster_error(&RosterError::PlayerNotFound(id)),
    }
}

#[utoipa::path(
    patch,
    path = "/players/{id}",
    tag = "Players",
    operation_id = "players_update",
    params(("id" = u64, Path, description = "Player id")),
    request_body = PlayerUpdateReq,
    responses(
        (status = 200, description = "Updated player", body = serde_json::Value),
        (status = 400, description = "No fields, blank name, or unknown class", body = serde_json::Value),
        (status = 404, description = "Unknown player", body = serde_json::Value),
        (status = 409, description = "Name already taken", body = serde_json::Value)
    )
)]
pub async fn players_update(
    State(state): State<AppState>,
    Path(id): Path<PlayerId>,
    Json(req): Json<PlayerUpdateReq>,
) -> Response {
    let mut roster = state.roster().lock().await;
    match roster.update_player(id, req.name.as_deref(), req.class.as_deref()) {
        Ok(player) => {
            state.bus().publish(topics::TOPIC_PLAYERS_UPDATED, &player);
            Json(player).into_response()
        }
        Err(err) => responses::roster_error(&err),
    }
}

/// Deletes a player and sweeps group membership and leader slots.
#[utoipa::path(
    delete,
    path = "/players/{id}",
    tag = "Players",
    operation_id = "players_delete",
    params(("id" = u64, Path, description = "Player id")),
    responses(
        (status = 200, description = "Removed player plus sweep summary", body = serde_json::Value),
        (status = 404, description = "Unknown player", body = serde_json::Value)
    )
)]
pub async fn players_delete(State(state): State<AppState>, Path(id): Path<PlayerId>) -> Response {
    let mut roster = state.roster().lock().await;
    match roster.delete_player(id) {
        Ok((player, groups_touched)) => {
            state.bus().publish(
                topics::TOPIC_PLAYERS_DELETED,
                &json!({"id": player.id, "name": player.name, "groupsTouched": groups_touched}),
            );
            responses::json_ok(json!({"removed": player, "groupsTouched": groups_touched}))
        }
        Err(err) => responses::roster_error(&err),
    }
}

/// Bulk import from an uploaded sheet (CSV or JSON rows).
#[utoipa::path(
    post,
    path = "/players/import",
    tag = "Players",
    operation_id = "players_import",
    request_body(
        content = String,
        description = "text/csv sheet with a 'Player Name,Class' header row, or a JSON array of objects with those keys"
    ),
    responses(
        (status = 200, description = "Per-row import report", body = serde_json::Value),
        (status = 400, description = "Undecodable payload", body = serde_json::Value)
    )
)]
pub async fn players_import(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let rows = match spreadsheet::decode_rows(content_type, &body) {
        Ok(rows) => rows,
        Err(err) => {
            return responses::problem_response(
                StatusCode::BAD_REQUEST,
                "Invalid Request",
                Some(&err),
            )
        }
    };
    let mut roster = state.roster().lock().await;
    let report = roster.import_players(&rows);
    state.bus().publish(
        topics::TOPIC_PLAYERS_IMPORTED,
        &json!({"added": report.added.len(), "errors": report.errors.len()}),
    );
    responses::json_ok(json!({
        "addedPlayers": report.added,
        "errors": report.errors,
        "addedCount": report.added.len(),
    }))
}
