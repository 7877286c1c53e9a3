//! Filesystem image store

use crate::domain::ImageStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Writes uploads under a root directory and reads them back by stored path
pub struct FsImageStore {
    root: PathBuf,
    seq: AtomicU64,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            seq: AtomicU64::new(0),
        }
    }

    /// `<millis>-<seq>-<name>`, so equal client file names never share a file
    fn stored_name(&self, file_name: &str) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        format!(
            "{}-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            seq,
            file_name
        )
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read image '{path}'"))
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("failed to create {}", self.root.display()))?;

        let path = self.root.join(self.stored_name(file_name));
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(path.to_string_lossy().into_owned())
    }

    async fn remove(&self, path: &str) -> Result<()> {
        tokio::fs::remove_file(path)
            .await
            .with_context(|| format!("failed to remove image '{path}'"))
    }
}
