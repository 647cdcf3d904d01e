use crate::service::{SyncService, ws_handler};
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// HTTP surface: the WebSocket endpoint plus a liveness probe.
pub fn app(service: SyncService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn index() -> &'static str {
    "drawsync collaboration server - connect via WebSocket at /ws"
}

async fn health() -> &'static str {
    "ok"
}
