//! formbot HTTP server - serves the LINE webhook on `PORT`.

use std::net::SocketAddr;

use anyhow::Result;
use tracing::{error, info};

use formbot::Dispatcher;
use formbot::api::server::create_router;
use formbot::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    formbot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting formbot server"
    );

    let dispatcher = Dispatcher::from_config(&config)?;
    let app = create_router(dispatcher);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
