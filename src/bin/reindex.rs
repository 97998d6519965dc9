//! Rebuilds the search snapshot from Notion.
//!
//! Exit codes: 0 success, 1 configuration error, 2 Notion API error,
//! 3 any other failure. Run at most one instance at a time per snapshot path.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use word_review::config::Config;
use word_review::notion::{NotionClient, NotionError};
use word_review::snapshot::{BuildError, SnapshotBuilder, SnapshotStore};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(1);
        }
    };

    let client = NotionClient::new(&config.notion);
    let store = SnapshotStore::new(&config.snapshot_path);

    match SnapshotBuilder::new(&client, &store).run().await {
        Ok(report) => {
            tracing::info!(
                "Reindex complete: {} documents over {} pages",
                report.documents,
                report.pages
            );
            ExitCode::SUCCESS
        }
        Err(BuildError::Source(NotionError::Upstream { status, body })) => {
            tracing::error!("Notion API error ({}): {}", status, body);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("Reindex failed: {}", e);
            ExitCode::from(3)
        }
    }
}
