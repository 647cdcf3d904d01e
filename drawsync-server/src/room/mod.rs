mod element_store;
mod room;
mod room_directory;

pub use element_store::*;
pub use room::*;
pub use room_directory::*;
