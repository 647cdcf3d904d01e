use crate::config::ServerConfig;
use crate::dispatcher::{Dispatcher, Flow};
use crate::registry::ConnectionRegistry;
use crate::room::RoomDirectory;
use axum::extract::ws::Message;
use drawsync_core::{ClientMessage, ConnectionId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

struct SyncInner {
    config: ServerConfig,
    registry: Arc<ConnectionRegistry>,
    rooms: Arc<RoomDirectory>,
    dispatcher: Dispatcher,
}

/// Cheaply cloneable handle to the whole in-memory state of the server.
#[derive(Clone)]
pub struct SyncService {
    inner: Arc<SyncInner>,
}

impl SyncService {
    pub fn new(config: ServerConfig) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let rooms = Arc::new(RoomDirectory::new());
        let dispatcher = Dispatcher::new(registry.clone(), rooms.clone());

        Self {
            inner: Arc::new(SyncInner {
                config,
                registry,
                rooms,
                dispatcher,
            }),
        }
    }

    /// Registers a new connection whose frames will be queued on `outbound`.
    pub fn connect(&self, outbound: mpsc::Sender<Message>) -> ConnectionId {
        let id = self.inner.registry.register(outbound);
        info!("Connection {} registered", id);
        id
    }

    /// Parses one text frame and dispatches it. Malformed frames are logged
    /// and dropped; the connection stays open.
    pub fn handle_text(&self, id: ConnectionId, text: &str) -> Flow {
        match ClientMessage::parse(text) {
            Ok(message) => self.inner.dispatcher.dispatch(id, message),
            Err(e) => {
                warn!("Dropping frame from {}: {}", id, e);
                Flow::Continue
            }
        }
    }

    pub fn dispatch(&self, id: ConnectionId, message: ClientMessage) -> Flow {
        self.inner.dispatcher.dispatch(id, message)
    }

    /// Idempotent teardown, run when the transport closes.
    pub fn disconnect(&self, id: ConnectionId) {
        self.inner.dispatcher.disconnect(id);
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.inner.registry
    }

    pub fn rooms(&self) -> &RoomDirectory {
        &self.inner.rooms
    }
}

impl Default for SyncService {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
