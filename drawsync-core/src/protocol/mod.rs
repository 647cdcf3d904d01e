mod client_message;
mod error;
mod server_message;

pub use client_message::ClientMessage;
pub use error::ProtocolError;
pub use server_message::ServerMessage;
