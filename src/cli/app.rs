use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::query::{CategoryFilter, SortOrder};

/// Folio: browse an author's publications
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Browse an author's publications")]
#[command(
    long_about = "Folio shows a catalog of publications with search, category filter and sorting, plus an about page with a contact form."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to ./folio.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed file overriding the configured or bundled catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Set log level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal browser
    Browse,

    /// Print the filtered and sorted catalog
    List {
        /// Case-insensitive text matched against title and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category key or label, or "all"
        #[arg(short, long)]
        category: Option<CategoryFilter>,

        /// Sort order (year-desc, year-asc, title, seed)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the author profile
    About {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Send the contact form (simulated)
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },

    /// Validate a seed file
    Validate {
        /// Seed file to check (defaults to the configured catalog)
        path: Option<PathBuf>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Browse => "browse",
            Commands::List { .. } => "list",
            Commands::About { .. } => "about",
            Commands::Contact { .. } => "contact",
            Commands::Validate { .. } => "validate",
        }
    }
}

/// Output formats for non-interactive commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
