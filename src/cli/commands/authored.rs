//! Authored command - resolve the authored date of one file

use crate::cli::args::{AuthoredArgs, OutputFormat};
use crate::config::Config;
use crate::content::authored::parse_date;
use crate::content::{resolve_authored_date, ContentNode, GitHistory};
use crate::error::ChrysanthiumResult;
use crate::ui::{self, UiContext};
use chrono::Local;

/// Execute the authored command
pub async fn execute(args: AuthoredArgs, config: &Config) -> ChrysanthiumResult<()> {
    let node = ContentNode::load(args.file.clone()).await?;

    let fallback = match args.fallback.as_deref() {
        Some(value) => parse_date(value)?,
        None => node
            .front_matter
            .declared_date()?
            .unwrap_or_else(|| Local::now().date_naive()),
    };

    let history = GitHistory::new(&config.content.git);
    let authored = resolve_authored_date(&history, &node.source, fallback).await;

    match args.format {
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::key_value(&ctx, "file", &node.source.display().to_string());
            ui::key_value(&ctx, "page", &node.page_path());
            ui::key_value(&ctx, "authored", &authored.to_string());
            ui::key_value(&ctx, "archive", &authored.year_month());
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "path": node.page_path(),
                "authorDate": authored.to_string(),
                "authored": authored,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Plain => println!("{}", authored),
    }

    Ok(())
}
