use crate::error::DeliveryError;
use crate::registry::{generate_color, generate_name};
use axum::extract::ws::Message;
use dashmap::DashMap;
use drawsync_core::{ConnectionId, Cursor, RoomKey, UserInfo};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Lightweight identity of one live connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionState {
    pub id: ConnectionId,
    pub name: String,
    pub color: String,
    /// `None` until the first join, and transiently during a room switch.
    pub room: Option<RoomKey>,
    pub presence: Option<Cursor>,
}

impl ConnectionState {
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            name: self.name.clone(),
            color: self.color.clone(),
        }
    }
}

struct RegisteredConnection {
    state: ConnectionState,
    outbound: mpsc::Sender<Message>,
}

/// Every live connection and the queue feeding its socket writer.
///
/// The registry never broadcasts on its own; callers decide who hears what.
/// Operations on an unknown id are no-ops, since an entry may already have
/// been removed by a concurrent close.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: DashMap<ConnectionId, RegisteredConnection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly accepted transport with a generated name and colour.
    pub fn register(&self, outbound: mpsc::Sender<Message>) -> ConnectionId {
        let id = ConnectionId::new();
        let state = ConnectionState {
            id,
            name: generate_name(),
            color: generate_color(),
            room: None,
            presence: None,
        };
        self.connections
            .insert(id, RegisteredConnection { state, outbound });
        id
    }

    /// Applies `patch` to the connection and returns the patched state.
    pub fn update<F>(&self, id: &ConnectionId, patch: F) -> Option<ConnectionState>
    where
        F: FnOnce(&mut ConnectionState),
    {
        let mut entry = self.connections.get_mut(id)?;
        patch(&mut entry.state);
        Some(entry.state.clone())
    }

    /// Removes the connection, returning its last known state so the caller
    /// can tell its former room.
    pub fn unregister(&self, id: &ConnectionId) -> Option<ConnectionState> {
        self.connections
            .remove(id)
            .map(|(_, connection)| connection.state)
    }

    pub fn get(&self, id: &ConnectionId) -> Option<ConnectionState> {
        self.connections.get(id).map(|entry| entry.state.clone())
    }

    pub fn user_info(&self, id: &ConnectionId) -> Option<UserInfo> {
        self.connections.get(id).map(|entry| entry.state.user_info())
    }

    pub fn room_of(&self, id: &ConnectionId) -> Option<RoomKey> {
        self.connections
            .get(id)
            .and_then(|entry| entry.state.room.clone())
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Queues one frame for the connection's writer without waiting.
    pub fn deliver(&self, id: &ConnectionId, frame: Message) -> Result<(), DeliveryError> {
        // Clone the sender so the map shard is not held while sending.
        let outbound = self
            .connections
            .get(id)
            .map(|entry| entry.outbound.clone())
            .ok_or(DeliveryError::UnknownConnection)?;

        outbound.try_send(frame).map_err(|e| match e {
            TrySendError::Full(_) => DeliveryError::QueueFull,
            TrySendError::Closed(_) => DeliveryError::Closed,
        })
    }
}
