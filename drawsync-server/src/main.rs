use anyhow::{Context, Result};
use drawsync_server::{ServerConfig, SyncService, app};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drawsync_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("Failed to read configuration")?;
    let addr = config.listen_addr();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("drawsync server listening on {}", addr);
    info!("WebSocket endpoint: ws://localhost:{}/ws", config.port);

    axum::serve(listener, app(SyncService::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with an error")?;

    info!("drawsync server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
