mod connection;
mod cursor;
mod element;
mod room_key;
mod user;

pub use connection::ConnectionId;
pub use cursor::Cursor;
pub use element::{Element, ElementDraft, ElementPatch, ElementRef, Props};
pub use room_key::{DEFAULT_ROOM, RoomKey};
pub use user::UserInfo;
