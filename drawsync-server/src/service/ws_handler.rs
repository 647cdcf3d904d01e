use crate::dispatcher::Flow;
use crate::service::SyncService;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SyncService>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, service))
}

async fn handle_socket(socket: WebSocket, service: SyncService) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel(service.config().outbound_capacity);

    let id = service.connect(tx);
    info!("New WebSocket connection: {}", id);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();

        async move {
            while let Some(msg) = receiver.next().await {
                match msg {
                    Ok(Message::Text(text)) => {
                        if service.handle_text(id, text.as_str()) == Flow::Close {
                            break;
                        }
                    }
                    Ok(Message::Binary(data)) => {
                        warn!("Ignoring {} byte binary frame from {}", data.len(), id);
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        warn!("WebSocket error for {}: {}", id, e);
                        break;
                    }
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    service.disconnect(id);
    info!("WebSocket disconnected: {}", id);
}
