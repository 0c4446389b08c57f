//! Daily quote rotation cache
//!
//! One record in one storage slot drives the rotation:
//!
//! | Stored record | Action | Writes |
//! |---------------|--------|--------|
//! | none or unreadable | fetch the list, draw, store | 1 |
//! | dated today | return its quote | 0 |
//! | dated earlier, pool left | draw from stored pool, store | 1 |
//! | dated earlier, pool empty | fetch the list, draw, store | 1 |
//!
//! Whenever the pool is empty after today's quote is settled, a refill
//! runs as a second phase: the caller gets today's quote immediately and
//! may await [`Refill::wait`] for the fresh pool to be stored.
//!
//! Failures never reach the caller. A failed fetch yields
//! [`Quote::empty`] and stores nothing.

use crate::config::schema::QuotesConfig;
use crate::config::ConfigManager;
use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use crate::quotes::picker::{draw, IndexPicker, ThreadRngPicker};
use crate::quotes::record::{Quote, QuoteCacheRecord};
use crate::quotes::slot::{FileSlot, StorageSlot};
use crate::quotes::source::{self, QuoteSource};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// How today's quote was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No record existed; the pool was fetched and a first quote drawn
    FirstRun,
    /// The stored record is for today; nothing changed
    Current,
    /// The stored record was stale; a new quote was drawn
    RolledOver,
    /// Nothing could be resolved; the placeholder is shown
    Unavailable,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstRun => "first-run",
            Self::Current => "current",
            Self::RolledOver => "rolled-over",
            Self::Unavailable => "unavailable",
        };
        write!(f, "{}", name)
    }
}

/// Pending refill of an exhausted pool
pub struct Refill {
    handle: JoinHandle<ChrysanthiumResult<usize>>,
}

impl Refill {
    /// Wait for the refill to finish, returning the new pool size
    pub async fn wait(self) -> ChrysanthiumResult<usize> {
        self.handle
            .await
            .map_err(|e| ChrysanthiumError::RefillTask(e.to_string()))?
    }
}

/// Result of a daily lookup
pub struct QuoteOfTheDay {
    /// Quote to show today
    pub quote: Quote,

    /// How the quote was obtained
    pub transition: Transition,

    /// Set when the pool ran dry and is being refilled
    pub refill: Option<Refill>,
}

impl QuoteOfTheDay {
    fn unavailable() -> Self {
        Self {
            quote: Quote::empty(),
            transition: Transition::Unavailable,
            refill: None,
        }
    }
}

/// Quote rotation over a single storage slot
pub struct QuoteCache {
    slot: Arc<dyn StorageSlot>,
    source: Arc<dyn QuoteSource>,
    picker: Box<dyn IndexPicker>,
}

impl QuoteCache {
    /// Create a cache drawing with the thread RNG
    pub fn new(slot: Arc<dyn StorageSlot>, source: Arc<dyn QuoteSource>) -> Self {
        Self {
            slot,
            source,
            picker: Box::new(ThreadRngPicker),
        }
    }

    /// Create the cache described by the configuration
    pub fn from_config(config: &QuotesConfig, manager: &ConfigManager) -> Self {
        let slot = FileSlot::new(&config.slot, manager.slot_path(&config.slot));
        Self::new(Arc::new(slot), source::from_config(config))
    }

    /// Replace the index picker
    pub fn with_picker(mut self, picker: impl IndexPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Resolve the quote for the current local day
    pub async fn quote_for_today(&self) -> QuoteOfTheDay {
        self.quote_for_day(Local::now().date_naive()).await
    }

    /// Resolve the quote for `today`
    pub async fn quote_for_day(&self, today: NaiveDate) -> QuoteOfTheDay {
        match self.resolve(today).await {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(slot = self.slot.name(), "No quote available: {}", e);
                QuoteOfTheDay::unavailable()
            }
        }
    }

    /// Read the stored record without changing it
    pub async fn peek(&self) -> ChrysanthiumResult<Option<QuoteCacheRecord>> {
        self.load().await
    }

    /// Drop the stored record
    pub async fn clear(&self) -> ChrysanthiumResult<()> {
        self.slot.clear().await?;
        info!("Cleared quote slot {}", self.slot.name());
        Ok(())
    }

    async fn resolve(&self, today: NaiveDate) -> ChrysanthiumResult<QuoteOfTheDay> {
        let (transition, record) = match self.load().await? {
            None => {
                debug!("No quote record, fetching initial pool");
                let pool = self.source.fetch().await?;
                (Transition::FirstRun, self.draw_and_store(today, pool).await?)
            }
            Some(record) if record.is_current(today) => {
                debug!("Quote record for {} is current", record.day());
                (Transition::Current, record)
            }
            Some(record) => {
                debug!(
                    "Quote record for {} expired, {} quote(s) left",
                    record.day(),
                    record.quotes.len()
                );
                let pool = if record.is_exhausted() {
                    info!("Quote pool exhausted, refilling before today's draw");
                    self.source.fetch().await?
                } else {
                    record.quotes
                };
                (Transition::RolledOver, self.draw_and_store(today, pool).await?)
            }
        };

        let refill = record
            .is_exhausted()
            .then(|| self.spawn_refill(record.clone()));

        Ok(QuoteOfTheDay {
            quote: record.random_quote,
            transition,
            refill,
        })
    }

    async fn load(&self) -> ChrysanthiumResult<Option<QuoteCacheRecord>> {
        let Some(content) = self.slot.read().await? else {
            return Ok(None);
        };

        match serde_json::from_slice(&content) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(slot = self.slot.name(), "Ignoring unreadable quote record: {}", e);
                Ok(None)
            }
        }
    }

    async fn draw_and_store(
        &self,
        today: NaiveDate,
        pool: Vec<Quote>,
    ) -> ChrysanthiumResult<QuoteCacheRecord> {
        let (quote, rest) = draw(pool, self.picker.as_ref())
            .ok_or_else(|| ChrysanthiumError::QuoteSourceEmpty(self.source.describe()))?;

        let record = QuoteCacheRecord::new(today, quote, rest);
        if let Err(e) = store(self.slot.as_ref(), &record).await {
            warn!(slot = self.slot.name(), "Failed to store quote record: {}", e);
        } else {
            info!(
                "Drew quote by {} for {}, {} left",
                record.random_quote.author,
                today,
                record.quotes.len()
            );
        }

        Ok(record)
    }

    fn spawn_refill(&self, record: QuoteCacheRecord) -> Refill {
        let slot = Arc::clone(&self.slot);
        let source = Arc::clone(&self.source);

        let handle = tokio::spawn(async move {
            info!("Refilling quote pool from {}", source.describe());
            let pool: Vec<Quote> = source
                .fetch()
                .await?
                .into_iter()
                .filter(|quote| *quote != record.random_quote)
                .collect();

            let size = pool.len();
            let refilled = QuoteCacheRecord {
                quotes: pool,
                ..record
            };
            store(slot.as_ref(), &refilled).await?;

            info!("Quote pool refilled with {} quote(s)", size);
            Ok(size)
        });

        Refill { handle }
    }
}

async fn store(slot: &dyn StorageSlot, record: &QuoteCacheRecord) -> ChrysanthiumResult<()> {
    let content = serde_json::to_string(record)?;
    slot.write(&content).await
}
