use activities_core::ActivityCatalog;
use activities_server::{
    build_router,
    config::ServerConfig,
    errors::ServerResult,
    monitoring::{self, MonitoringLayer},
    AppState,
};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    if config.monitoring {
        use colored::*;
        tracing::info!("{}", "🏫 Activities Server with Monitoring".bold().cyan());
        tracing::info!("{}", "===================================".cyan());
        tracing::info!("");
    }

    let catalog = Arc::new(ActivityCatalog::seeded());
    tracing::info!("Catalog ready with {} activities", catalog.len());

    let mut app_state = AppState::new(catalog);
    if config.monitoring {
        let (tx, rx) = tokio::sync::mpsc::channel(1000);
        monitoring::spawn_monitoring_display(rx).await;
        app_state = app_state.with_monitoring(MonitoringLayer::new(tx));
    }

    let mut app = build_router(Arc::new(app_state), &config.static_dir);
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting activities server on {}", addr);
    tracing::info!("Serving static files from {}", config.static_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
