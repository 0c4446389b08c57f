//! Cache command - inspect or clear the quote slot

use crate::cli::args::{CacheAction, CacheArgs, OutputFormat};
use crate::config::{Config, ConfigManager};
use crate::error::ChrysanthiumResult;
use crate::quotes::{QuoteCache, QuoteCacheRecord};
use crate::ui::{self, UiContext};

/// Execute the cache command
pub async fn execute(
    args: CacheArgs,
    config: &Config,
    manager: &ConfigManager,
) -> ChrysanthiumResult<()> {
    let cache = QuoteCache::from_config(&config.quotes, manager);

    match args.action {
        CacheAction::Show { format } => show_record(&cache, format).await,
        CacheAction::Clear { yes } => clear_record(&cache, yes).await,
    }
}

async fn show_record(cache: &QuoteCache, format: OutputFormat) -> ChrysanthiumResult<()> {
    let Some(record) = cache.peek().await? else {
        match format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                ui::step_info(&UiContext::detect(), "No quote record stored");
            }
        }
        return Ok(());
    };

    match format {
        OutputFormat::Table => print_record(&record),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Plain => println!("{}", record.random_quote.quote),
    }

    Ok(())
}

fn print_record(record: &QuoteCacheRecord) {
    let ctx = UiContext::detect();
    ui::key_value(&ctx, "day", &record.day().to_string());
    ui::key_value(&ctx, "quote", &record.random_quote.quote);
    ui::key_value(
        &ctx,
        "by",
        &format!("{} - {}", record.random_quote.author, record.random_quote.from),
    );
    ui::key_value(&ctx, "remaining", &record.quotes.len().to_string());
}

async fn clear_record(cache: &QuoteCache, yes: bool) -> ChrysanthiumResult<()> {
    let ctx = UiContext::detect().with_auto_yes(yes);

    if cache.peek().await?.is_none() {
        ui::step_info(&ctx, "No quote record to clear");
        return Ok(());
    }

    if !ui::confirm(&ctx, "Remove the stored quote rotation?", false).await? {
        ui::step_warn(&ctx, "Aborted (pass --yes to skip the prompt)");
        return Ok(());
    }

    cache.clear().await?;
    ui::step_ok(&ctx, "Quote record cleared");
    Ok(())
}
