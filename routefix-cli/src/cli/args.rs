use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Rename numbered markdown files to match the routes in your site config
#[derive(Parser, Debug)]
#[command(name = "routefix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Site config to scan for routes (default: .vitepress/config.mjs)
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub site_config: Option<PathBuf>,

    /// Assume yes for the confirmation prompt
    #[arg(short = 'y', long = "yes", global = true, env = "ROUTEFIX_YES")]
    pub yes: bool,

    /// Suppress progress messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show proposed renames, ask for confirmation, then rename (default)
    Sync {
        /// Show the proposed renames without prompting or renaming
        #[arg(long)]
        dry_run: bool,

        /// How to show the proposed renames
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for the final result
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// List proposed renames without touching any files
    Plan {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// List the article routes extracted from the site config
    Routes {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}

impl Commands {
    /// The command run when none is given on the command line.
    pub fn default_sync() -> Self {
        Self::Sync {
            dry_run: false,
            preview: None,
            output: OutputFormat::Summary,
        }
    }
}
