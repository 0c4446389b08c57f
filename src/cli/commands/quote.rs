//! Quote command - show today's quote page

use crate::cli::args::QuoteArgs;
use crate::config::{Config, ConfigManager};
use crate::error::ChrysanthiumResult;
use crate::quotes::page::ENSO;
use crate::quotes::{QuoteCache, QuotePage};
use crate::ui::{self, UiContext};
use chrono::Local;
use tracing::{debug, warn};

/// Execute the quote command
pub async fn execute(
    args: QuoteArgs,
    config: &Config,
    manager: &ConfigManager,
) -> ChrysanthiumResult<()> {
    let mut quotes = config.quotes.clone();
    if let Some(source) = args.source {
        quotes.source = source;
    }

    let cache = QuoteCache::from_config(&quotes, manager);
    let today = Local::now().date_naive();
    let resolved = cache.quote_for_day(today).await;
    debug!("Quote for {} is {}", today, resolved.transition);

    let page = QuotePage::render(&resolved.quote, today);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        let ctx = UiContext::detect();
        if ctx.is_interactive() {
            ui::intro(&ctx, ENSO);
            ui::note(
                &ctx,
                &page.date,
                &format!("{}\n{}", page.quote, page.attribution()),
            );
        } else {
            println!("{}", page);
        }
    }

    // Let the refill land before the process exits
    if let Some(refill) = resolved.refill {
        match refill.wait().await {
            Ok(size) => debug!("Quote pool refilled with {} quote(s)", size),
            Err(e) if e.is_retryable() => {
                warn!("Quote pool refill failed, retrying on the next draw: {}", e)
            }
            Err(e) => warn!("Quote pool refill failed: {}", e),
        }
    }

    Ok(())
}
