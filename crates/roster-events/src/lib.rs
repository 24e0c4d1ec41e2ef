use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

/// Event envelope published for every roster mutation (RFC3339 time).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Envelope {
    pub time: String,
    pub kind: String,
    pub payload: Value,
}

/// Broadcast bus for JSON-serializable roster events.
///
/// Subscribers that fall behind the channel capacity miss events; there is no
/// replay. The server treats the stream as advisory, not as a journal.
#[derive(Clone)]
pub struct Bus {
    tx: broadcast::Sender<Envelope>,
}

impl Bus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.tx.subscribe()
    }

    /// Number of live subscribers (diagnostics only).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn publish<T: Serialize>(&self, kind: &str, payload: &T) {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let val =
            serde_json::to_value(payload).unwrap_or_else(|_| serde_json::json!({"_ser":"error"}));
        let _ = self.tx.send(Envelope {
            time: now,
            kind: kind.to_string(),
            payload: val,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn published_envelope_reaches_subscriber() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        bus.publish("players.created", &json!({"id": 1, "name": "Alice"}));
        let env = rx.recv().await.expect("envelope");
        assert_eq!(env.kind, "players.created");
        assert_eq!(env.payload["name"], "Alice");
        assert!(!env.time.is_empty());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = Bus::new(8);
        bus.publish("groups.created", &json!({"id": 7}));
        assert_eq!(bus.receiver_count(), 0);
    }
}
