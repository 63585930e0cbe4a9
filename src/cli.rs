//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for ninja-nutrition using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive landing page (default)
//! - **recipes**: Print the filtered catalog as a table, JSON or CSV
//! - **show**: Print one recipe in full
//! - **categories**: List category labels with recipe counts
//! - **config**: Inspect or change settings
//! - **completions**: Generate a shell completion script
//!
//! # Examples
//!
//! ```
//! use ninja_nutrition::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["ninja-nutrition", "recipes", "-s", "смузи"]);
//! match cli.get_command() {
//!     Commands::Recipes { filter, .. } => assert_eq!(filter.search.as_deref(), Some("смузи")),
//!     _ => unreachable!(),
//! }
//! ```

use crate::category::Category;
use crate::config;
use crate::filter::{FilterState, SortOrder};
use crate::output::RecipeFormat;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Search and category options shared by `browse` and `recipes`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Case-insensitive substring of the recipe name
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Category label or key (e.g. Обед, lunch); "all" disables the restriction
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<Category>,
}

impl FilterArgs {
    /// Build the starting filter, falling back to the configured category
    #[must_use]
    pub fn to_filter(&self, default_category: Category) -> FilterState {
        FilterState::new(
            self.search.clone().unwrap_or_default(),
            self.category.unwrap_or(default_category),
        )
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., default_category=lunch)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY", value_parser = PossibleValuesParser::new(config::KEYS))]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ninja-nutrition")]
#[command(about = "Superhero nutrition landing page and recipe catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Recipe catalog file (.json or .toml), overrides config
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Log filter (e.g. debug, ninja_nutrition=trace), overrides config
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive landing page (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,

        /// Do not capture the mouse
        #[arg(long = "no-mouse")]
        no_mouse: bool,

        /// Draw icons with plain ASCII
        #[arg(long = "ascii")]
        ascii: bool,
    },

    /// List recipes matching a search term and category
    #[command(visible_alias = "ls")]
    Recipes {
        #[command(flatten)]
        filter: FilterArgs,

        /// Result order
        #[arg(long = "sort", value_enum, default_value_t = SortOrder::Catalog)]
        sort: SortOrder,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = RecipeFormat::Table)]
        format: RecipeFormat,
    },

    /// Show a recipe with macros, ingredients and steps
    Show {
        /// Recipe id
        #[arg(value_name = "ID")]
        id: u32,
    },

    /// List categories with recipe counts
    Categories,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filter: FilterArgs::default(),
            no_mouse: false,
            ascii: false,
        })
    }
}
