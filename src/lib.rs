//! Chrysanthium - the logic behind a static technical blog
//!
//! Serves one quote per calendar day from a persisted, shrinking pool
//! and resolves the authored date of posts from git history.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod quotes;
pub mod ui;

pub use error::{ChrysanthiumError, ChrysanthiumResult};
