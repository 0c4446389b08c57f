//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, QuotesConfig};
use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Keys accepted by `config set`
const KEYS: [&str; 6] = [
    "general.log_format",
    "quotes.source",
    "quotes.slot",
    "quotes.fetch_timeout_secs",
    "content.dir",
    "content.git",
];

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
) -> ChrysanthiumResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => {
            let mut updated = config.clone();
            set_value(&mut updated, &key, &value)?;
            manager.save(&updated).await?;
            ui::step_ok(&UiContext::detect(), &format!("Set {} = {}", key, value));
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> ChrysanthiumResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> ChrysanthiumResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn(
            &ctx,
            &format!(
                "Config already exists at {} (use --force to overwrite)",
                path.display()
            ),
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok(&ctx, &format!("Configuration initialized at {}", path.display()));
    Ok(())
}

/// Apply a dot-separated key to the configuration
fn set_value(config: &mut Config, key: &str, value: &str) -> ChrysanthiumResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => match value {
            "text" | "json" => config.general.log_format = value.to_string(),
            _ => {
                return Err(ChrysanthiumError::User(format!(
                    "Invalid log format: {}. Use text or json",
                    value
                )))
            }
        },
        ["quotes", "source"] => config.quotes.source = value.to_string(),
        ["quotes", "slot"] => {
            if !QuotesConfig::is_valid_slot(value) {
                return Err(ChrysanthiumError::User(format!(
                    "Invalid slot name: {}. Use a plain name without path separators",
                    value
                )));
            }
            config.quotes.slot = value.to_string()
        }
        ["quotes", "fetch_timeout_secs"] => config.quotes.fetch_timeout_secs = parse_u64(value)?,
        ["content", "dir"] => config.content.dir = PathBuf::from(value),
        ["content", "git"] => config.content.git = value.to_string(),
        _ => {
            return Err(ChrysanthiumError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_u64(value: &str) -> ChrysanthiumResult<u64> {
    value
        .parse()
        .map_err(|_| ChrysanthiumError::User(format!("Invalid number: {}", value)))
}
