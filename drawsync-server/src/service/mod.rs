mod sync_service;
mod ws_handler;

pub use sync_service::*;
pub use ws_handler::*;
