//! Build-time content processing
//!
//! Resolves the authored date of every markdown source and assembles
//! the render context of its page.

pub mod authored;
pub mod build;
pub mod front_matter;
pub mod history;

pub use authored::{resolve_authored_date, AuthoredDate};
pub use build::{discover, render_contexts, ContentNode, RenderContext};
pub use front_matter::FrontMatter;
pub use history::{GitHistory, VersionHistory};
