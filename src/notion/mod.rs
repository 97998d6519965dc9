//! Remote Source Adapter
//!
//! Everything that talks to the Notion database lives here.
//!
//! ## Submodules
//! - **`client`**: `NotionClient`, the HTTP client for query/get/update calls.
//! - **`normalize`**: converts raw pages into flat `Document`s.
//! - **`types`**: wire DTOs and property-name constants.

pub mod client;
pub mod normalize;
pub mod types;


use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use client::NotionClient;
pub use normalize::normalize_page;
pub use types::QueryPage;

#[derive(Debug, Error)]
pub enum NotionError {
    /// Notion answered with a non-success status.
    #[error("Notion API error {status}: {body}")]
    Upstream { status: u16, body: Value },

    #[error("request to Notion failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected Notion response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A cursor-paginated source of raw records.
///
/// Implemented by [`NotionClient`]; the snapshot builder only depends on this
/// trait.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches one page starting at `cursor` (`None` for the first page).
    async fn fetch_page(
        &self,
        cursor: Option<String>,
        page_size: u32,
    ) -> Result<QueryPage, NotionError>;
}
