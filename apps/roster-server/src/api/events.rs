use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use axum::response::IntoResponse;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;

use crate::AppState;

/// Server-Sent Events stream of roster envelopes.
///
/// Live only: subscription starts at the current bus position and lagging
/// clients skip missed events instead of stalling the stream.
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    operation_id = "events_sse",
    responses(
        (status = 200, description = "SSE stream of envelopes", content_type = "text/event-stream")
    )
)]
pub async fn events_sse(State(state): State<AppState>) -> impl IntoResponse {
    let rx = state.bus().subscribe();
    let stream = BroadcastStream::new(rx)
        .filter_map(|item| item.ok())
        .map(|env| {
            let data = serde_json::to_string(&env).unwrap_or_else(|_| "{}".to_string());
            Ok::<SseEvent, Infallible>(SseEvent::default().event(env.kind).data(data))
        });
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(10))
            .text("keep-alive"),
    )
}
