//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for media-gallery using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Print the visible items for a search/type/tag filter (default)
//! - **tags**: Print every tag with the number of items carrying it
//! - **types**: Print the type picker options (`all` first)
//! - **show**: Print the detail view of one item
//! - **config**: Read or change configuration values
//! - **completions**: Generate a shell completion script
//!
//! # Examples
//!
//! ```
//! use media_gallery::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["media-gallery", "list", "-s", "facebook", "-t", "policy"]);
//! match cli.get_command() {
//!     Commands::List(args) => {
//!         let state = args.filter.to_filter_state();
//!         assert_eq!(state.search_value, "facebook");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::filters::FilterState;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Output format for item listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON for scripting
    Json,
    /// CSV with the catalog column layout
    Csv,
}

/// Output format for the detail view
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON for scripting
    Json,
}

/// Search, type and tag filter flags
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Case-insensitive text to find in title, description or notes
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show items of this type (`all` for no restriction)
    #[arg(short = 'T', long = "type", value_name = "TYPE")]
    pub media_type: Option<String>,

    /// Only show items carrying at least one of these tags (repeatable)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

impl FilterArgs {
    /// Build the filter state these flags describe
    #[must_use]
    pub fn to_filter_state(&self) -> FilterState {
        let mut state = FilterState::new().with_tags(self.tags.iter().cloned());
        if let Some(search) = &self.search {
            state.set_search_value(search.clone());
        }
        if let Some(media_type) = &self.media_type {
            state.set_type_selection(media_type.as_str());
        }
        state
    }
}

/// Arguments for the list command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ShowArgs {
    /// Id of the item to show
    pub id: String,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = DetailFormat::Text)]
    pub format: DetailFormat,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., catalog=media.json)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (catalog, quiet, placeholder_image)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List visible media items (default)
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List tags with the number of items carrying each
    Tags,

    /// List the type filter options
    Types,

    /// Show the detail view of one item
    Show(ShowArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "media-gallery")]
#[command(about = "Filter, search and inspect a tagged media catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog file to load (overrides config)
    #[arg(short = 'c', long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse arguments from the process environment
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse arguments from an explicit list (first item is the binary name)
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to an unfiltered List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::List(ListArgs::default()))
    }

    /// Default log filter directive for the requested verbosity
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Whether the command needs a loaded catalog
    #[must_use]
    pub fn needs_catalog(&self) -> bool {
        !matches!(
            self.command,
            Some(Commands::Config { .. } | Commands::Completions { .. })
        )
    }
}
