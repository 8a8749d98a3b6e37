//! Settlement ingestion HTTP server.
//!
//! Structure follows `datasynth-server/src/main.rs`: a panic hook that logs
//! before aborting, a `tokio::select!` over Ctrl+C and SIGTERM for graceful
//! shutdown, and a `tracing_subscriber` initialised from `ServerConfig`
//! before anything else runs.

use std::panic;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settle_server::{build_router, AppState, ServerConfig};

fn setup_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        error!("server panic: {panic_info}");
        default_hook(panic_info);
    }));
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("received SIGTERM, initiating graceful shutdown"),
    }

    state.jobs.cancel_all();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    let default_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .init();

    setup_panic_hook();

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let router = build_router(state.clone());

    info!(%addr, "starting settlement ingestion server");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    info!("server shutdown complete");
    Ok(())
}
