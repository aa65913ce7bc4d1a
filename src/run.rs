//! Application run: logger init and subcommand dispatch.

use std::error::Error;
use std::io;

use clap::CommandFactory;

use action_manifest::core::app;
use action_manifest::core::batch::BatchOptions;
use action_manifest::core::cli as commands;
use action_manifest::core::config::Config;
use action_manifest::core::discovery::DiscoveryOptions;
use action_manifest::core::manifest::ValidationOptions;

use crate::cli::{Args, Commands, generate};

/// Initialize env_logger on stderr so stdout stays clean for results.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run the selected subcommand. Returns `false` when any manifest failed.
pub fn dispatch(args: &Args, config: &Config) -> Result<bool, Box<dyn Error>> {
    let discovery = DiscoveryOptions {
        include: args.include.clone().unwrap_or_else(|| config.include.clone()),
        ..Default::default()
    };
    let batch = BatchOptions {
        validation: ValidationOptions {
            check_usage: args.strict_usage || config.strict_usage,
        },
        all_errors: args.all_errors,
    };

    match &args.command {
        Commands::Scan { root } => {
            let root = config.resolve_root(root.as_deref())?;
            commands::run_scan(&root, &discovery, args.json)?;
            Ok(true)
        }
        Commands::Validate { files } => commands::run_validate(files, &batch, args.json),
        Commands::Check { root } => {
            let root = config.resolve_root(root.as_deref())?;
            commands::run_check(&root, &discovery, &batch, args.json)
        }
        Commands::New { file, force } => {
            commands::run_new(file, *force)?;
            Ok(true)
        }
        Commands::Config => {
            commands::run_config(config);
            Ok(true)
        }
        Commands::Completions { shell } => {
            generate(*shell, &mut Args::command(), app::NAME, &mut io::stdout());
            Ok(true)
        }
    }
}
