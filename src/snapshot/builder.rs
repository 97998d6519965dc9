use std::path::PathBuf;

use thiserror::Error;

use super::store::SnapshotStore;
use super::types::Document;
use super::SnapshotError;
use crate::notion::{normalize_page, NotionError, PageSource};

/// Records requested per upstream page during a rebuild.
pub const REBUILD_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Source(#[from] NotionError),

    #[error(transparent)]
    Store(#[from] SnapshotError),
}

/// Outcome of a successful rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct RebuildReport {
    pub documents: usize,
    pub pages: usize,
    pub path: PathBuf,
}

/// Drives a full paginated sweep of a [`PageSource`] into a [`SnapshotStore`].
///
/// Documents are buffered in memory and written once at the end; any page
/// failure aborts the run before the store is touched. Only one builder should
/// run against a given path at a time.
pub struct SnapshotBuilder<'a, S: ?Sized> {
    source: &'a S,
    store: &'a SnapshotStore,
    page_size: u32,
}

impl<'a, S: PageSource + ?Sized> SnapshotBuilder<'a, S> {
    pub fn new(source: &'a S, store: &'a SnapshotStore) -> Self {
        Self {
            source,
            store,
            page_size: REBUILD_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub async fn run(&self) -> Result<RebuildReport, BuildError> {
        tracing::info!(
            "Starting reindex into {}",
            self.store.path().display()
        );

        let mut documents: Vec<Document> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.source.fetch_page(cursor.take(), self.page_size).await?;
            pages += 1;
            documents.extend(page.results.iter().map(normalize_page));
            tracing::info!("Fetched batch {}, total so far: {}", pages, documents.len());

            if !page.has_more {
                break;
            }
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    tracing::warn!("Upstream reported more pages but no cursor; stopping");
                    break;
                }
            }
        }

        self.store.replace(&documents).await?;
        tracing::info!(
            "Wrote {} with {} documents",
            self.store.path().display(),
            documents.len()
        );

        Ok(RebuildReport {
            documents: documents.len(),
            pages,
            path: self.store.path().to_path_buf(),
        })
    }
}
