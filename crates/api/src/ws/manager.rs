use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use cachewise_core::types::Timestamp;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::{mpsc, RwLock};

/// Outbound queue of one monitor feed subscriber.
struct Subscriber {
    outbox: mpsc::UnboundedSender<Message>,
    joined_at: Timestamp,
}

/// Registry of monitor feed subscribers keyed by connection id.
///
/// Each subscriber's socket task drains its own channel, so fanning out a
/// frame never waits on a slow client.
#[derive(Default)]
pub struct WsManager {
    subscribers: RwLock<HashMap<String, Subscriber>>,
}

impl WsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `conn_id` and hand back the receiving end of its queue.
    pub async fn add(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (outbox, inbox) = mpsc::unbounded_channel();
        let subscriber = Subscriber {
            outbox,
            joined_at: Utc::now(),
        };
        self.subscribers.write().await.insert(conn_id, subscriber);
        inbox
    }

    pub async fn remove(&self, conn_id: &str) {
        let removed = self.subscribers.write().await.remove(conn_id);
        if let Some(sub) = removed {
            let open_secs = (Utc::now() - sub.joined_at).num_seconds();
            tracing::debug!(conn_id, open_secs, "Monitor feed subscriber removed");
        }
    }

    /// Queue `message` for every subscriber and forget those whose socket
    /// task has already exited. Returns how many subscribers remain.
    pub async fn broadcast(&self, message: Message) -> usize {
        let mut subs = self.subscribers.write().await;
        subs.retain(|conn_id, sub| {
            let alive = sub.outbox.send(message.clone()).is_ok();
            if !alive {
                tracing::debug!(conn_id = %conn_id, "Dropping closed monitor feed subscriber");
            }
            alive
        });
        subs.len()
    }

    /// Encode `payload` as a JSON text frame and broadcast it.
    pub async fn broadcast_json<T: Serialize>(&self, payload: &T) {
        if let Some(frame) = json_frame(payload) {
            self.broadcast(frame).await;
        }
    }

    /// Encode `payload` as a JSON text frame for a single subscriber.
    ///
    /// Returns `false` if the subscriber is unknown, gone, or the payload
    /// could not be encoded.
    pub async fn send_json_to<T: Serialize>(&self, conn_id: &str, payload: &T) -> bool {
        let Some(frame) = json_frame(payload) else {
            return false;
        };
        self.subscribers
            .read()
            .await
            .get(conn_id)
            .is_some_and(|sub| sub.outbox.send(frame).is_ok())
    }

    /// Keep-alive ping for every subscriber.
    pub async fn ping_all(&self) -> usize {
        self.broadcast(Message::Ping(Bytes::new())).await
    }

    pub async fn connection_count(&self) -> usize {
        self.subscribers.read().await.len()
    }

    /// Queue a Close frame for every subscriber and empty the registry.
    pub async fn shutdown_all(&self) {
        let drained: Vec<_> = self.subscribers.write().await.drain().collect();
        for (_, sub) in &drained {
            let _ = sub.outbox.send(Message::Close(None));
        }
        tracing::info!(count = drained.len(), "Closed all monitor feed subscribers");
    }
}

fn json_frame<T: Serialize>(payload: &T) -> Option<Message> {
    match serde_json::to_string(payload) {
        Ok(text) => Some(Message::Text(text.into())),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode WebSocket payload");
            None
        }
    }
}
