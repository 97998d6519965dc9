use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use super::types::Document;
use super::SnapshotError;
use crate::config::Config;

/// Parsed snapshot kept around while the file on disk is unchanged.
struct CachedSnapshot {
    modified: SystemTime,
    len: u64,
    documents: Arc<Vec<Document>>,
}

/// The on-disk JSON array of documents.
///
/// Reads go to disk on every call unless caching is enabled, in which case the
/// parsed array is reused until the file's modification time or size changes.
pub struct SnapshotStore {
    path: PathBuf,
    cache: Option<RwLock<Option<CachedSnapshot>>>,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
        }
    }

    pub fn with_cache(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Some(RwLock::new(None)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.snapshot_cache {
            Self::with_cache(&config.snapshot_path)
        } else {
            Self::new(&config.snapshot_path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every document in snapshot order.
    pub async fn load(&self) -> Result<Arc<Vec<Document>>, SnapshotError> {
        let Some(cache) = &self.cache else {
            return self.read_from_disk().await.map(Arc::new);
        };

        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|source| self.unavailable(source))?;
        let modified = metadata
            .modified()
            .map_err(|source| self.unavailable(source))?;
        let len = metadata.len();

        if let Some(cached) = cache.read().await.as_ref() {
            if cached.modified == modified && cached.len == len {
                return Ok(cached.documents.clone());
            }
        }

        let documents = Arc::new(self.read_from_disk().await?);
        tracing::debug!(
            "Snapshot cache refreshed from {} ({} documents)",
            self.path.display(),
            documents.len()
        );
        *cache.write().await = Some(CachedSnapshot {
            modified,
            len,
            documents: documents.clone(),
        });
        Ok(documents)
    }

    /// Number of documents in the current snapshot.
    pub async fn count(&self) -> Result<usize, SnapshotError> {
        Ok(self.load().await?.len())
    }

    /// Replaces the whole snapshot with `documents`.
    ///
    /// The array is written to a temporary file next to the target and renamed
    /// over it, so readers see either the old or the new snapshot in full. On
    /// failure the previous snapshot is left untouched.
    pub async fn replace(&self, documents: &[Document]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_failed(source))?;
        }

        let data = serde_json::to_vec_pretty(documents)
            .map_err(|e| self.write_failed(std::io::Error::other(e)))?;
        let tmp_path = self.temp_path();

        if let Err(source) = write_and_sync(&tmp_path, &data).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.write_failed(source));
        }
        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.write_failed(source));
        }

        if let Some(cache) = &self.cache {
            *cache.write().await = None;
        }
        Ok(())
    }

    async fn read_from_disk(&self) -> Result<Vec<Document>, SnapshotError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| self.unavailable(source))?;
        serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
    }

    fn unavailable(&self, source: std::io::Error) -> SnapshotError {
        SnapshotError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }

    fn write_failed(&self, source: std::io::Error) -> SnapshotError {
        SnapshotError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

async fn write_and_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    Ok(())
}
