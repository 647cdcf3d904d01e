mod connection_registry;
mod identity;

pub use connection_registry::*;
pub use identity::*;
