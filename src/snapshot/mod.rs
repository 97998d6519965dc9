//! Snapshot Module
//!
//! The flat, point-in-time export of the remote database that local search
//! runs against.
//!
//! ## Lifecycle
//! 1. **Build**: `SnapshotBuilder` pages through the remote source and
//!    normalizes every record into a `Document`.
//! 2. **Persist**: `SnapshotStore::replace` swaps the whole JSON array in one
//!    rename; there are no partial updates.
//! 3. **Read**: queries call `SnapshotStore::load`, which parses the file
//!    (or returns the cached copy while the file is unchanged).

pub mod builder;
pub mod store;
pub mod types;


use std::path::PathBuf;

use thiserror::Error;

pub use builder::{BuildError, RebuildReport, SnapshotBuilder};
pub use store::SnapshotStore;
pub use types::Document;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file is missing or cannot be read.
    #[error("index not available at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not a JSON array of documents.
    #[error("index at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write index {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SnapshotError {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Unavailable { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
