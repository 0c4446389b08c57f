//! Content discovery and render context assembly
//!
//! Every markdown file under the content directory becomes one node.
//! Each node is augmented with its authored date and turned into the
//! context its page template is rendered with.

use crate::content::authored::{resolve_authored_date, AuthoredDate};
use crate::content::front_matter::FrontMatter;
use crate::content::history::VersionHistory;
use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// A markdown source and its front matter
#[derive(Debug, Clone)]
pub struct ContentNode {
    pub source: PathBuf,
    pub front_matter: FrontMatter,
}

impl ContentNode {
    /// Read and parse a markdown file
    pub async fn load(source: PathBuf) -> ChrysanthiumResult<Self> {
        let text = fs::read_to_string(&source)
            .await
            .map_err(|e| ChrysanthiumError::io(format!("reading {}", source.display()), e))?;
        let front_matter = FrontMatter::parse(&source, &text)?;
        Ok(Self {
            source,
            front_matter,
        })
    }

    fn stem(&self) -> String {
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// URL path of the generated page
    pub fn page_path(&self) -> String {
        match self.front_matter.path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => format!("/{}", self.stem()),
        }
    }

    pub fn title(&self) -> String {
        self.front_matter.title.clone().unwrap_or_else(|| self.stem())
    }
}

/// Context handed to a page template
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    pub path: String,
    pub title: String,
    /// `DD/MM/YYYY`
    pub author_date: String,
    pub authored: AuthoredDate,
    pub source: PathBuf,
}

/// Find every markdown file under `dir`, sorted by path
pub async fn discover(dir: &Path) -> ChrysanthiumResult<Vec<ContentNode>> {
    if !dir.is_dir() {
        return Err(ChrysanthiumError::ContentDirNotFound(dir.to_path_buf()));
    }

    let mut files = vec![];
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let mut entries = fs::read_dir(&current).await.map_err(|e| {
            ChrysanthiumError::io(format!("reading directory {}", current.display()), e)
        })?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ChrysanthiumError::io("reading directory entry", e))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| ChrysanthiumError::io(format!("inspecting {}", path.display()), e))?;

            if file_type.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
    }

    files.sort();
    debug!("Found {} markdown file(s) in {}", files.len(), dir.display());

    let mut nodes = Vec::with_capacity(files.len());
    for file in files {
        nodes.push(ContentNode::load(file).await?);
    }
    Ok(nodes)
}

/// Augment nodes with authored dates and build their render contexts
///
/// Nodes without a front-matter date fall back to `today`.
pub async fn render_contexts(
    nodes: &[ContentNode],
    history: &dyn VersionHistory,
    today: NaiveDate,
) -> ChrysanthiumResult<Vec<RenderContext>> {
    let mut contexts = Vec::with_capacity(nodes.len());
    let mut seen = HashSet::new();

    for node in nodes {
        let fallback = node.front_matter.declared_date()?.unwrap_or(today);
        let authored = resolve_authored_date(history, &node.source, fallback).await;
        let path = node.page_path();

        if !seen.insert(path.clone()) {
            warn!("Duplicate page path {} from {}", path, node.source.display());
        }

        contexts.push(RenderContext {
            path,
            title: node.title(),
            author_date: authored.to_string(),
            authored,
            source: node.source.clone(),
        });
    }

    contexts.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(contexts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct NoHistory;

    #[async_trait]
    impl VersionHistory for NoHistory {
        async fn last_change(&self, _path: &Path) -> ChrysanthiumResult<Option<String>> {
            Ok(None)
        }
    }

    async fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.unwrap();
        }
        fs::write(path, content).await.unwrap();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[tokio::test]
    async fn discover_finds_nested_markdown() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.md", "# b").await;
        write(temp.path(), "2021/a.md", "# a").await;
        write(temp.path(), "image.png", "").await;

        let nodes = discover(temp.path()).await.unwrap();
        let names: Vec<_> = nodes.iter().map(|n| n.title()).collect();

        assert_eq!(nodes.len(), 2);
        assert!(names.contains(&"a".to_string()));
        assert!(names.contains(&"b".to_string()));
    }

    #[tokio::test]
    async fn discover_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = discover(&temp.path().join("posts")).await.unwrap_err();
        assert!(matches!(err, ChrysanthiumError::ContentDirNotFound(_)));
    }

    #[tokio::test]
    async fn contexts_use_front_matter() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "lifetimes.md",
            "---\ntitle: Lifetimes\npath: /rust/lifetimes\ndate: 2021-03-05\n---\nbody",
        )
        .await;
        write(temp.path(), "untitled.md", "no front matter").await;

        let nodes = discover(temp.path()).await.unwrap();
        let contexts = render_contexts(&nodes, &NoHistory, today()).await.unwrap();

        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts[0].path, "/rust/lifetimes");
        assert_eq!(contexts[0].title, "Lifetimes");
        assert_eq!(contexts[0].author_date, "05/03/2021");

        assert_eq!(contexts[1].path, "/untitled");
        assert_eq!(contexts[1].author_date, "19/10/2026");
    }

    #[tokio::test]
    async fn contexts_serialize_camel_case() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "post.md", "---\ndate: 2020-01-02\n---\n").await;

        let nodes = discover(temp.path()).await.unwrap();
        let contexts = render_contexts(&nodes, &NoHistory, today()).await.unwrap();
        let json = serde_json::to_value(&contexts[0]).unwrap();

        assert_eq!(json["authorDate"], "02/01/2020");
        assert_eq!(json["authored"]["year"], "2020");
    }

    #[tokio::test]
    async fn invalid_front_matter_date_is_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "post.md", "---\ndate: someday\n---\n").await;

        let nodes = discover(temp.path()).await.unwrap();
        let err = render_contexts(&nodes, &NoHistory, today()).await.unwrap_err();
        assert!(matches!(err, ChrysanthiumError::InvalidDate { .. }));
    }
}
