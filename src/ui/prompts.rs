//! Confirmation prompts

use super::context::UiContext;
use crate::error::{ChrysanthiumError, ChrysanthiumResult};

/// Ask a yes/no question
///
/// Returns `true` under auto-yes and `default` when not interactive.
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> ChrysanthiumResult<bool> {
    if ctx.auto_yes() {
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    // cliclack blocks on stdin
    let message = message.to_string();
    tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| ChrysanthiumError::User(format!("Prompt task failed: {}", e)))?
    .map_err(|e| ChrysanthiumError::User(format!("Prompt failed: {}", e)))
}
