// Services portal HTTP server
//
// Usage: cargo run --bin portal_server
// Configuration: see `services_portal::config` (CONTENT_DIR, STATIC_DIR, PORT, ...)

use std::net::SocketAddr;

use anyhow::Context;
use services_portal::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "services_portal=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portal server...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_DIR: {}", config.content_dir.display());
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  SITE_URL: {}", config.site.base_url);

    let state = AppState::new(&config);

    let report = state.store.validate();
    if report.is_clean() {
        tracing::info!(
            "Content check passed ({} partitions, {} records)",
            report.partitions_checked,
            report.records_checked
        );
    } else {
        for issue in &report.issues {
            tracing::warn!("Content issue: {}", issue);
        }
    }

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
