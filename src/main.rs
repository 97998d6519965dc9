use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use word_review::auth::AuthPolicy;
use word_review::config::Config;
use word_review::notion::NotionClient;
use word_review::server::build_router;
use word_review::snapshot::SnapshotStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Set NOTION_TOKEN and NOTION_DB_ID (a .env file works too)");
            std::process::exit(1);
        }
    };

    // 1. Remote source:
    let notion = Arc::new(NotionClient::new(&config.notion));
    tracing::info!("Using Notion database {}", notion.database_id());

    // 2. Snapshot store:
    let store = Arc::new(SnapshotStore::from_config(&config));
    tracing::info!(
        "Serving search from {} (cache {})",
        store.path().display(),
        if config.snapshot_cache { "on" } else { "off" }
    );

    if config.auth == AuthPolicy::Open {
        tracing::warn!("API_KEY not set; endpoints are open");
    }

    // 3. HTTP Router:
    let app = build_router(store, notion, config.auth.clone());

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("word-review listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
