//! Output helpers shared by the commands

use super::context::UiContext;
use console::style;

/// Title line
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.is_interactive() {
        cliclack::intro(style(title).magenta().bold()).ok();
    } else {
        println!("{}", style(title).bold());
    }
}

/// Boxed block of text under a heading
pub fn note(ctx: &UiContext, title: &str, message: &str) {
    if ctx.is_interactive() {
        cliclack::note(title, message).ok();
    } else {
        println!("{}", style(title).dim());
        println!("{}", message);
    }
}

pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.is_interactive() {
        cliclack::log::success(message).ok();
    } else {
        println!("  {} {}", style("[OK]").green(), message);
    }
}

pub fn step_warn(ctx: &UiContext, message: &str) {
    if ctx.is_interactive() {
        cliclack::log::warning(message).ok();
    } else {
        println!("  {} {}", style("[WARN]").yellow(), message);
    }
}

pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.is_interactive() {
        cliclack::log::info(message).ok();
    } else {
        println!("  {} {}", style("[INFO]").cyan(), message);
    }
}

/// Aligned `key: value` line
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    if ctx.is_interactive() {
        println!("  {}: {}", style(key).dim(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_does_not_panic() {
        let ctx = UiContext::non_interactive();
        intro(&ctx, "Senshi");
        note(&ctx, "令和8年10月19日", "Know thyself.");
        step_ok(&ctx, "done");
        step_warn(&ctx, "careful");
        step_info(&ctx, "fyi");
        key_value(&ctx, "slot", "senshi");
    }
}
