//! Shared vocabulary of the drawsync collaboration protocol.
//!
//! `model` holds the identifiers and the drawable element record, `protocol`
//! holds the closed set of JSON frames exchanged over a connection.

pub mod model;
pub mod protocol;

pub use model::{
    ConnectionId, Cursor, DEFAULT_ROOM, Element, ElementDraft, ElementPatch, ElementRef, Props, RoomKey,
    UserInfo,
};
pub use protocol::{ClientMessage, ProtocolError, ServerMessage};
