//! YAML front matter of markdown sources

use crate::content::authored::parse_date;
use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Metadata block at the top of a markdown file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub path: Option<String>,
    pub date: Option<String>,
}

impl FrontMatter {
    /// Parse the front matter of `source`; files without one get defaults
    pub fn parse(path: &Path, source: &str) -> ChrysanthiumResult<Self> {
        let Some((yaml, _body)) = split(source) else {
            return Ok(Self::default());
        };

        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| ChrysanthiumError::FrontMatter {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The declared date, if any
    pub fn declared_date(&self) -> ChrysanthiumResult<Option<NaiveDate>> {
        self.date.as_deref().map(parse_date).transpose()
    }
}

/// Split `---` delimited front matter from the document body
pub fn split(source: &str) -> Option<(&str, &str)> {
    let rest = source.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}
