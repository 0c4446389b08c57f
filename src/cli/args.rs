//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Chrysanthium - daily quotes and authored dates for a static blog
///
/// Serves one quote per day from a persisted rotation and resolves the
/// authored date of blog posts from git history.
#[derive(Parser, Debug)]
#[command(name = "chrysanthium")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CHRYSANTHIUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the quote slot
    #[arg(long, global = true, env = "CHRYSANTHIUM_STATE_DIR")]
    pub state_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's quote
    Quote(QuoteArgs),

    /// Resolve the authored date of a single file
    Authored(AuthoredArgs),

    /// Build render contexts for all content
    Build(BuildArgs),

    /// Inspect or clear the quote slot
    Cache(CacheArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the quote command
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,

    /// Quote list URL or path (overrides quotes.source)
    #[arg(long)]
    pub source: Option<String>,
}

/// Arguments for the authored command
#[derive(Parser, Debug)]
pub struct AuthoredArgs {
    /// Markdown file to inspect
    pub file: PathBuf,

    /// Date used when the file has no history (YYYY-MM-DD)
    #[arg(long)]
    pub fallback: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Content directory (overrides content.dir)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., quotes.source)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Show the stored rotation record
    Show {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Remove the stored rotation record
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_quote() {
        let cli = Cli::parse_from(["chrysanthium", "quote", "--json"]);
        match cli.command {
            Commands::Quote(args) => {
                assert!(args.json);
                assert!(args.source.is_none());
            }
            _ => panic!("expected Quote command"),
        }
    }

    #[test]
    fn cli_parses_authored_with_fallback() {
        let cli = Cli::parse_from([
            "chrysanthium",
            "authored",
            "posts/hello.md",
            "--fallback",
            "2021-03-05",
        ]);
        match cli.command {
            Commands::Authored(args) => {
                assert_eq!(args.file, PathBuf::from("posts/hello.md"));
                assert_eq!(args.fallback.as_deref(), Some("2021-03-05"));
                assert_eq!(args.format, OutputFormat::Table);
            }
            _ => panic!("expected Authored command"),
        }
    }

    #[test]
    fn cli_parses_build_format() {
        let cli = Cli::parse_from(["chrysanthium", "build", "--content", "src/pages", "-f", "json"]);
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.content, Some(PathBuf::from("src/pages")));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn cli_parses_cache_clear() {
        let cli = Cli::parse_from(["chrysanthium", "cache", "clear", "--yes"]);
        match cli.command {
            Commands::Cache(CacheArgs {
                action: CacheAction::Clear { yes },
            }) => assert!(yes),
            _ => panic!("expected cache clear"),
        }
    }

    #[test]
    fn cli_global_state_dir() {
        let cli = Cli::parse_from(["chrysanthium", "--state-dir", "/tmp/x", "quote"]);
        assert_eq!(cli.state_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["chrysanthium", "quote"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["chrysanthium", "-vv", "quote"]);
        assert_eq!(cli.verbose, 2);
    }
}
