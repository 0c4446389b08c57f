//! Quote sources
//!
//! The quote list is a static resource shaped as `{"quotes": [...]}`,
//! served over HTTP or shipped next to the site as `quotes.json`.

use crate::config::schema::QuotesConfig;
use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use crate::quotes::record::{Quote, QuoteList};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;
use tracing::debug;

/// Where the full quote list comes from
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the complete quote list
    async fn fetch(&self) -> ChrysanthiumResult<Vec<Quote>>;

    /// Human-readable location for logs and errors
    fn describe(&self) -> String;
}

/// Quote list served over HTTP(S)
pub struct HttpQuoteSource {
    url: String,
    timeout: Duration,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> ChrysanthiumResult<Vec<Quote>> {
        let url = self.url.clone();
        let timeout = self.timeout;
        debug!("Fetching quotes from {}", url);

        let body = tokio::task::spawn_blocking(move || {
            let agent: ureq::Agent = ureq::Agent::config_builder()
                .timeout_global(Some(timeout))
                .build()
                .into();

            agent
                .get(&url)
                .call()
                .and_then(|mut response| response.body_mut().read_to_string())
        })
        .await
        .map_err(|e| ChrysanthiumError::fetch(&self.url, e))?
        .map_err(|e| ChrysanthiumError::fetch(&self.url, e))?;

        parse_quote_list(&self.url, &body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Quote list read from a local JSON file
pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl QuoteSource for FileQuoteSource {
    async fn fetch(&self) -> ChrysanthiumResult<Vec<Quote>> {
        debug!("Reading quotes from {}", self.path.display());
        let body = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ChrysanthiumError::fetch(self.describe(), e))?;

        parse_quote_list(&self.describe(), &body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Build the source named by the configuration
pub fn from_config(config: &QuotesConfig) -> Arc<dyn QuoteSource> {
    let source = config.source.trim();
    if source.starts_with("http://") || source.starts_with("https://") {
        Arc::new(HttpQuoteSource::new(
            source,
            Duration::from_secs(config.fetch_timeout_secs),
        ))
    } else {
        Arc::new(FileQuoteSource::new(PathBuf::from(source)))
    }
}

fn parse_quote_list(source_name: &str, body: &str) -> ChrysanthiumResult<Vec<Quote>> {
    let list: QuoteList =
        serde_json::from_str(body).map_err(|e| ChrysanthiumError::fetch(source_name, e))?;

    if list.quotes.is_empty() {
        return Err(ChrysanthiumError::QuoteSourceEmpty(source_name.to_string()));
    }

    Ok(list.quotes)
}
