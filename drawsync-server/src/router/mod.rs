mod broadcast_router;

pub use broadcast_router::*;
