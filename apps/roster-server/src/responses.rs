use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::{json, Value};

pub(crate) fn json_ok(payload: Value) -> Response {
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) fn problem_response(
    status: StatusCode,
    title: &str,
    detail: Option<&str>,
) -> Response {
    let mut body = json!({
        "type": "about:blank",
        "title": title,
        "status": status.as_u16(),
    });
    if let Some(detail) = detail {
        body["detail"] = Value::String(detail.to_string());
    }
    (status, Json(body)).into_response()
}

/// Maps a registry error onto the HTTP surface: missing things are 404,
/// name/membership collisions are 409, everything else is a 400.
pub(crate) fn status_for(err: &RosterError) -> StatusCode {
    match err {
        RosterError::PlayerNotFound(_) | RosterError::GroupNotFound(_) => StatusCode::NOT_FOUND,
        RosterError::DuplicatePlayerName(_)
        | RosterError::DuplicateGroupName(_)
        | RosterError::AlreadyMember(_) => StatusCode::CONFLICT,
        RosterError::MissingPlayerField
        | RosterError::MissingGroupName
        | RosterError::InvalidClass(_)
        | RosterError::LeaderNotFound(_)
        | RosterError::LeaderNotMember(_)
        | RosterError::NotMember(_)
        | RosterError::EmptyUpdate => StatusCode::BAD_REQUEST,
    }
}

pub(crate) fn roster_error(err: &RosterError) -> Response {
    let status = status_for(err);
    let title = match status {
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::CONFLICT => "Conflict",
        _ => "Invalid Request",
    };
    problem_response(status, title, Some(&err.to_string()))
}
