//! Version-control history lookups

use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Access to file history
#[async_trait]
pub trait VersionHistory: Send + Sync {
    /// Timestamp of the most recent commit touching `path`
    ///
    /// `None` when the file has no history.
    async fn last_change(&self, path: &Path) -> ChrysanthiumResult<Option<String>>;
}

/// History read through the git CLI
pub struct GitHistory {
    git: String,
}

impl GitHistory {
    pub fn new(git: impl Into<String>) -> Self {
        Self { git: git.into() }
    }
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::new("git")
    }
}

#[async_trait]
impl VersionHistory for GitHistory {
    async fn last_change(&self, path: &Path) -> ChrysanthiumResult<Option<String>> {
        // git runs from the file's directory so the repository is found
        // regardless of the working directory
        let absolute = match tokio::fs::canonicalize(path).await {
            Ok(p) => p,
            Err(e) => {
                debug!("Cannot resolve {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        let mut cmd = Command::new(&self.git);
        cmd.args(["log", "-1", "--pretty=format:%aI", "--"])
            .arg(&absolute)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = absolute.parent() {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| ChrysanthiumError::command_failed(format!("{} log", self.git), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("git log failed for {}: {}", path.display(), stderr.trim());
            return Ok(None);
        }

        let timestamp = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if timestamp.is_empty() {
            Ok(None)
        } else {
            Ok(Some(timestamp))
        }
    }
}
