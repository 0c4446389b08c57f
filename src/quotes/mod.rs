//! Daily quote rotation
//!
//! A shuffled pool of quotes is persisted in one storage slot and
//! shrinks by one quote per calendar day. When it runs dry the full list
//! is fetched again.

pub mod cache;
pub mod era;
pub mod page;
pub mod picker;
pub mod record;
pub mod slot;
pub mod source;

pub use cache::{QuoteCache, QuoteOfTheDay, Refill, Transition};
pub use page::QuotePage;
pub use picker::{IndexPicker, SequencePicker, ThreadRngPicker};
pub use record::{Quote, QuoteCacheRecord};
pub use slot::{FileSlot, MemorySlot, StorageSlot};
pub use source::{FileQuoteSource, HttpQuoteSource, QuoteSource};
