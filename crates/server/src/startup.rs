use std::net::SocketAddr;

use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes::{self, AppState};

/// Public entry: build the app on an empty store and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = tokio::net::lookup_host(cfg.bind_addr())
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("cannot resolve bind address {}", cfg.bind_addr()))?;
    let listener = TcpListener::bind(addr).await?;
    // 每个进程一份空的内存书库
    let app = routes::build_router(AppState::in_memory());
    serve(listener, app).await
}

/// Serve an already-bound listener with graceful shutdown on Ctrl+C.
pub async fn serve(listener: TcpListener, app: axum::Router) -> anyhow::Result<()> {
    let local = listener.local_addr()?;
    info!(addr = %local, "Server running on http://localhost:{}", local.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}
