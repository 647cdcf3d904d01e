use crate::error::DeliveryError;
use crate::registry::ConnectionRegistry;
use axum::extract::ws::Message;
use drawsync_core::{ConnectionId, ServerMessage};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Fans messages out to connections through their outbound queues.
///
/// Sends never wait: a recipient whose queue is full or closed loses that
/// frame and the loop moves on to the next one.
#[derive(Clone)]
pub struct BroadcastRouter {
    registry: Arc<ConnectionRegistry>,
}

impl BroadcastRouter {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Unicast to a single connection.
    pub fn send(&self, to: &ConnectionId, message: &ServerMessage) -> bool {
        match encode(message) {
            Some(frame) => self.deliver(to, frame, message.kind()),
            None => false,
        }
    }

    /// Sends to every member except `sender`. Returns how many recipients
    /// accepted the frame.
    pub fn broadcast(
        &self,
        members: &[ConnectionId],
        sender: &ConnectionId,
        message: &ServerMessage,
    ) -> usize {
        let Some(frame) = encode(message) else {
            return 0;
        };

        let mut delivered = 0;
        for member in members.iter().filter(|member| *member != sender) {
            if self.deliver(member, frame.clone(), message.kind()) {
                delivered += 1;
            }
        }
        delivered
    }

    fn deliver(&self, to: &ConnectionId, frame: Message, kind: &str) -> bool {
        match self.registry.deliver(to, frame) {
            Ok(()) => true,
            // Closed concurrently; its own teardown announces the departure.
            Err(DeliveryError::UnknownConnection) => {
                debug!("Skipping {} for departed connection {}", kind, to);
                false
            }
            Err(e) => {
                warn!("Dropping {} for {}: {}", kind, to, e);
                false
            }
        }
    }
}

fn encode(message: &ServerMessage) -> Option<Message> {
    match serde_json::to_string(message) {
        Ok(json) => Some(Message::Text(json.into())),
        Err(e) => {
            error!("Failed to serialize {}: {}", message.kind(), e);
            None
        }
    }
}
