//! CLI commands: scan, validate, check, new, config.
//!
//! Results go to stdout as plain text, or as JSON with `--json`. Diagnostics go
//! through `log` to stderr.

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::core::app;
use crate::core::batch::{self, BatchOptions, BatchReport};
use crate::core::config::Config;
use crate::core::discovery::{self, DiscoveryOptions};
use crate::core::manifest::{self, Manifest};

/// Run the `scan` command: list files under `root` that look like action manifests.
pub fn run_scan(
    root: &Path,
    options: &DiscoveryOptions,
    json: bool,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let files = discovery::find_action_manifests(root, options)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for f in &files {
            println!("{}", f.display());
        }
    }
    Ok(files)
}

/// Run the `validate` command. Returns whether every file passed.
pub fn run_validate(
    paths: &[PathBuf],
    options: &BatchOptions,
    json: bool,
) -> Result<bool, Box<dyn Error>> {
    let report = batch::validate_files(paths, options);
    print_report(&report, json)?;
    Ok(report.all_passed())
}

/// Run the `check` command: scan `root`, then validate every manifest found.
pub fn run_check(
    root: &Path,
    discovery_options: &DiscoveryOptions,
    options: &BatchOptions,
    json: bool,
) -> Result<bool, Box<dyn Error>> {
    let files = discovery::find_action_manifests(root, discovery_options)?;
    let report = batch::validate_files(&files, options);
    print_report(&report, json)?;
    if !json {
        println!(
            "\n{} manifests: {} passed, {} failed",
            report.files.len(),
            report.passed().count(),
            report.failed().count()
        );
    }
    Ok(report.all_passed())
}

fn print_report(report: &BatchReport, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for file in &report.files {
        if file.ok {
            println!("{}: ok", file.path.display());
        } else {
            println!("{}: FAILED", file.path.display());
            for e in &file.errors {
                println!("  {}", e);
            }
        }
    }
    Ok(())
}

/// Starter manifest written by `new`: one two-handed set with an inventory action.
pub fn sample_manifest() -> Manifest {
    let mut m = Manifest::new();
    m.add_action("/actions/main/in/OpenInventory", "mandatory", "boolean");
    m.add_default_binding("some_controller", "mygame_bindings_some_controller.json");
    m.add_action_set("/actions/main", "leftright");
    m.add_localization_entry("en_us", "/actions/main", "Main");
    m.add_localization_entry("en_us", "/actions/main/in/OpenInventory", "Open Inventory");
    m
}

/// Run the `new` command: write the starter manifest to `path`.
pub fn run_new(path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    let m = sample_manifest();
    manifest::validate(&m)?;
    manifest::save(&m, path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Run the `config` command: show the effective settings.
pub fn run_config(config: &Config) {
    let root = config
        .root
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    println!("{} {}", app::NAME, app::VERSION);
    println!("Root:          {}", root);
    println!("Include:       {}", config.include);
    println!("Strict usage:  {}", config.strict_usage);
}
