//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  action-manifest scan                     List manifests in the default Steam library
  action-manifest scan ~/games             List manifests under ~/games
  action-manifest validate actions.json    Validate one or more files
  action-manifest check --all-errors       Scan and validate, reporting every violation
  action-manifest new actions.json         Write a starter manifest
  action-manifest config                   Show effective settings
  action-manifest completions bash         Generate bash completions

ENVIRONMENT:
  ACTION_MANIFEST_ROOT           Directory to scan when ROOT is omitted
  ACTION_MANIFEST_STRICT_USAGE   1 or true to also check action set usages
  ACTION_MANIFEST_INCLUDE        Candidate file glob (default: *.json)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find and validate controller action manifests",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Also check each action set's usage (single, leftright, hidden)
    #[arg(long, global = true)]
    pub strict_usage: bool,

    /// Report every violation per file instead of stopping at the first
    #[arg(long, global = true)]
    pub all_errors: bool,

    /// Glob for candidate files, relative to ROOT (default: *.json)
    #[arg(long, global = true, value_name = "GLOB")]
    pub include: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List files that look like action manifests
    Scan {
        /// Directory to search (default: ACTION_MANIFEST_ROOT or the Steam library)
        root: Option<PathBuf>,
    },
    /// Validate manifest files
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Scan a directory and validate every manifest found
    Check {
        /// Directory to search (default: ACTION_MANIFEST_ROOT or the Steam library)
        root: Option<PathBuf>,
    },
    /// Write a starter manifest
    New {
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show effective settings
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
