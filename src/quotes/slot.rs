//! Storage slots holding the serialized rotation record
//!
//! A slot is a single named value that is read whole and overwritten
//! whole. The file slot persists between runs; the memory slot backs
//! tests and dry runs.

use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// A single named storage slot
#[async_trait]
pub trait StorageSlot: Send + Sync {
    /// Slot name, used in logs
    fn name(&self) -> &str;

    /// Read the raw slot contents, `None` when nothing has been stored
    async fn read(&self) -> ChrysanthiumResult<Option<Vec<u8>>>;

    /// Replace the slot contents
    async fn write(&self, contents: &str) -> ChrysanthiumResult<()>;

    /// Remove the slot contents
    async fn clear(&self) -> ChrysanthiumResult<()>;
}

/// Slot backed by a JSON file in the state directory
pub struct FileSlot {
    name: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

#[async_trait]
impl StorageSlot for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> ChrysanthiumResult<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read(&self.path).await.map_err(|e| {
            ChrysanthiumError::io(format!("reading slot file {}", self.path.display()), e)
        })?;

        Ok(Some(content))
    }

    async fn write(&self, contents: &str) -> ChrysanthiumResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ChrysanthiumError::io("creating state directory", e))?;
        }

        fs::write(&self.path, contents).await.map_err(|e| {
            ChrysanthiumError::io(format!("writing slot file {}", self.path.display()), e)
        })?;

        debug!("Wrote slot {} to {}", self.name, self.path.display());
        Ok(())
    }

    async fn clear(&self) -> ChrysanthiumResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await.map_err(|e| {
                ChrysanthiumError::io(format!("removing slot file {}", self.path.display()), e)
            })?;
        }
        Ok(())
    }
}

/// In-memory slot that counts writes
#[derive(Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `contents`
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of writes since creation
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current contents
    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl StorageSlot for MemorySlot {
    fn name(&self) -> &str {
        "memory"
    }

    async fn read(&self) -> ChrysanthiumResult<Option<Vec<u8>>> {
        Ok(self.contents.lock().await.clone().map(String::into_bytes))
    }

    async fn write(&self, contents: &str) -> ChrysanthiumResult<()> {
        *self.contents.lock().await = Some(contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> ChrysanthiumResult<()> {
        *self.contents.lock().await = None;
        Ok(())
    }
}
