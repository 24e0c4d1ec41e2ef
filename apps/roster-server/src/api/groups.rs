use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::{GroupId, PlayerId, RosterError};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use utoipa::ToSchema;

use crate::{responses, AppState};
use roster_topics as topics;

#[derive(Deserialize, ToSchema)]
pub struct GroupCreateReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "leaderId")]
    #[schema(value_type = Option<u64>)]
    pub leader_id: Option<PlayerId>,
}

#[derive(Deserialize, ToSchema, Default)]
pub struct GroupUpdateReq {
    #[serde(default)]
    pub name: Option<String>,
    /// Absent leaves the leader unchanged; explicit null clears it.
    #[serde(default, rename = "leaderId", deserialize_with = "tri_state_leader")]
    #[schema(value_type = Option<u64>, nullable)]
    pub leader_id: Option<Option<PlayerId>>,
}

#[derive(Deserialize, ToSchema)]
pub struct MemberAddReq {
    #[serde(default, rename = "playerId")]
    #[schema(value_type = Option<u64>)]
    pub player_id: Option<PlayerId>,
}

// Field present (even as null) lands in Some(..); absent stays None via the
// serde default.
fn tri_state_leader<'de, D>(deserializer: D) -> Result<Option<Option<PlayerId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<PlayerId>::deserialize(deserializer).map(Some)
}

/// All groups as resolved views, in creation order.
#[utoipa::path(
    get,
    path = "/groups",
    tag = "Groups",
    operation_id = "groups_list",
    responses(
        (status = 200, description = "Group views with resolved members", body = serde_json::Value)
    )
)]
pub async fn groups_list(State(state): State<AppState>) -> impl IntoResponse {
    let roster = state.roster().lock().await;
    Json(roster.group_views())
}

#[utoipa::path(
    post,
    path = "/groups",
    tag = "Groups",
    operation_id = "groups_create",
    request_body = GroupCreateReq,
    responses(
        (status = 201, description = "Created group", body = serde_json::Value),
        (status = 400, description = "Missing name or unknown leader", body = serde_json::Value),
        (status = 409, description = "Name already taken", body = serde_json::Value)
    )
)]
pub async fn groups_create(
    State(state): State<AppState>,
    Json(req): Json<GroupCreateReq>,
) -> Response {
    let mut roster = state.roster().lock().await;
    let name = req.name.as_deref().unwrap_or("");
    match roster.create_group(name, req.leader_id) {
        Ok(group) => {
            state.bus().publish(topics::TOPIC_GROUPS_CREATED, &group);
            (StatusCode::CREATED, Json(group)).into_response()
        }
        Err(err) => responses::roster_error(&err),
    }
}

#[utoipa::path(
    get,
    path = "/groups/{id}",
    tag = "Groups",
    operation_id = "groups_get",
    params(("id" = u64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group view with resolved members", body = serde_json::Value),
        (status = 404, description = "Unknown group", body = serde_json::Value)
    )
)]
pub async fn groups_get(State(state): State<AppState>, Path(id): Path<GroupId>) -> Response {
    let roster = state.roster().lock().await;
    match roster.group_view(id) {
        Some(view) => Json(view).into_response(),
        None => responses::roster_error(&RosterError::GroupNotFound(id)),
    }
}

#[utoipa::path(
    patch,
    path = "/groups/{id}",
    tag = "Groups",
    operation_id = "groups_update",
    params(("id" = u64, Path, description = "Group id")),
    request_body = GroupUpdateReq,
    responses(
        (status = 200, description = "Updated group", body = serde_json::Value),
        (status = 400, description = "No fields, blank name, or leader not a member", body = serde_json::Value),
        (status = 404, description = "Unknown group", body = serde_json::Value),
        (status = 409, description = "Name already taken", body = serde_json::Value)
    )
)]
pub async fn groups_update(
    State(state): State<AppState>,
    Path(id): Path<GroupId>,
    Json(req): Json<GroupUpdateReq>,
) -> Response {
    let mut roster = state.roster().lock().await;
    match roster.update_group(id, req.name.as_deref(), req.leader_id) {
        Ok(group) => {
            state.bus().publish(topics::TOPIC_GROUPS_UPDATED, &group);
            Json(group).into_response()
        }
        Err(err) => responses::roster_error(&err),
    }
}

#[utoipa::path(
    delete,
    path = "/groups/{id}",
    tag = "Groups",
    operation_id = "groups_delete",
    params(("id" = u64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Removed group", body = serde_json::Value),
        (status = 404, description = "Unknown group", body = serde_json::Value)
    )
)]
pub async fn groups_delete(State(state): State<AppState>, Path(id): Path<GroupId>) -> Response {
    let mut roster = state.roster().lock().await;
    match roster.delete_group(id) {
        Ok(group) => {
            state.bus().publish(
                topics::TOPIC_GROUPS_DELETED,
                &json!({"id": group.id, "name": group.name}),
            );
            responses::json_ok(json!({"removed": group}))
        }
        Err(err) => responses::roster_error(&err),
    }
}

#[utoipa::path(
    post,
    path = "/groups/{id}/members",
    tag = "Groups",
    operation_id = "members_add",
    params(("id" = u64, Path, description = "Group id")),
    request_body = MemberAddReq,
    responses(
        (status = 200, description = "Group with the new member", body = serde_json::Value),
        (status = 400, description = "Missing playerId", body = serde_json::Value),
        (status = 404, description = "Unknown group or player", body = serde_json::Value),
        (status = 409, description = "Already a member", body = serde_json::Value)
    )
)]
pub async fn members_add(
    State(state): State<AppState>,
    Path(id): Path<GroupId>,
    Json(req): Json<MemberAddReq>,
) -> Response {
    let Some(player_id) = req.player_id else {
        return responses::problem_response(
            StatusCode::BAD_REQUEST,
            "Invalid Request",
            Some("playerId is required"),
        );
    };
    let mut roster = state.roster().lock().await;
    match roster.add_member(id, player_id) {
        Ok(group) => {
            state.bus().publish(
                topics::TOPIC_GROUPS_MEMBER_ADDED,
                &json!({"groupId": id, "playerId": player_id}),
            );
            Json(group).into_response()
        }
        Err(err) => responses::roster_error(&err),
    }
}

#[utoipa::path(
    delete,
    path = "/groups/{id}/members/{player_id}",
    tag = "Groups",
    operation_id = "members_remove",
    params(
        ("id" = u64, Path, description = "Group id"),
        ("player_id" = u64, Path, description = "Member player id")
    ),
    responses(
        (status = 200, description = "Group without the member", body = serde_json::Value),
        (status = 400, description = "Not a member", body = serde_json::Value),
        (status = 404, description = "Unknown group", body = serde_json::Value)
    )
)]
pub async fn members_remove(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(GroupId, PlayerId)>,
) -> Response {
    let mut roster = state.roster().lock().await;
    match roster.remove_member(id, player_id) {
        Ok(group) => {
            state.bus().publish(
                topics::TOPIC_GROUPS_MEMBER_REMOVED,
                &json!({"groupId": id, "playerId": player_id}),
            );
            Json(group).into_response()
        }
        Err(err) => responses::roster_error(&err),
    }
}
