//! CLI command implementations

pub mod authored;
pub mod build;
pub mod cache;
pub mod config;
pub mod quote;

pub use authored::execute as authored;
pub use build::execute as build;
pub use cache::execute as cache;
pub use config::execute as config;
pub use quote::execute as quote;
