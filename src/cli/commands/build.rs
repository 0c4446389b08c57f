//! Build command - resolve authored dates and emit render contexts

use crate::cli::args::{BuildArgs, OutputFormat};
use crate::config::Config;
use crate::content::{discover, render_contexts, GitHistory, RenderContext};
use crate::error::ChrysanthiumResult;
use crate::ui::{self, UiContext};
use chrono::Local;
use console::style;
use tracing::info;

/// Execute the build command
pub async fn execute(args: BuildArgs, config: &Config) -> ChrysanthiumResult<()> {
    let dir = args.content.unwrap_or_else(|| config.content.dir.clone());
    let nodes = discover(&dir).await?;

    let history = GitHistory::new(&config.content.git);
    let contexts = render_contexts(&nodes, &history, Local::now().date_naive()).await?;
    info!("Built {} render context(s) from {}", contexts.len(), dir.display());

    if contexts.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, &format!("No markdown files in {}", dir.display()));
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&contexts),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&contexts)?),
        OutputFormat::Plain => {
            for context in &contexts {
                println!("{}", context.path);
            }
        }
    }

    Ok(())
}

fn print_table(contexts: &[RenderContext]) {
    println!(
        "{:<40} {:<12} {:<40}",
        style("PATH").bold(),
        style("AUTHORED").bold(),
        style("TITLE").bold()
    );
    println!("{}", "-".repeat(92));

    for context in contexts {
        println!(
            "{:<40} {:<12} {:<40}",
            context.path, context.author_date, context.title
        );
    }

    println!();
    println!("{} page(s)", contexts.len());
}
