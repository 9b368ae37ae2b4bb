use anyhow::{Context, Result};
use nixspaces_server::{config::ServerConfig, routes};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nixspaces_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NixSpaces backend...");

    let config = ServerConfig::from_env()?;
    match &config.static_dir {
        Some(dir) => info!(static_dir = %dir.display(), "serving front-end assets"),
        None => info!("no static dir configured, serving API only"),
    }

    let app = routes::router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("bind {}", config.bind_addr))?;

    let addr = listener.local_addr().context("local addr")?;
    info!(%addr, "nixspaces-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;

    info!("nixspaces-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!("ctrl-c handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    }
}
