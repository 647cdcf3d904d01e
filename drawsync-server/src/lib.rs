//! Real-time collaboration server for a shared drawing surface.
//!
//! Connections join rooms; each room holds its members and an ordered,
//! in-memory element collection. Mutations are applied under the room's
//! lock and then fanned out to every other member.

mod app;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod room;
pub mod router;
pub mod service;

pub use app::app;
pub use config::ServerConfig;
pub use dispatcher::{Dispatcher, Flow};
pub use error::{ConfigError, DeliveryError};
pub use registry::{ConnectionRegistry, ConnectionState};
pub use room::{ElementStore, Fanout, Room, RoomDirectory};
pub use router::BroadcastRouter;
pub use service::{SyncService, ws_handler};
