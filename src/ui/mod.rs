//! Terminal output for the CLI
//!
//! Uses `cliclack` when attached to a terminal and falls back to plain
//! lines in CI or when output is piped.

mod context;
mod output;
mod prompts;

pub use context::UiContext;
pub use output::{intro, key_value, note, step_info, step_ok, step_warn};
pub use prompts::confirm;
