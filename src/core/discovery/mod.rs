//! Candidate file discovery: walk a library directory for JSON files and keep
//! the ones that look like action manifests.

mod ignore;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::Glob;
use walkdir::WalkDir;

use crate::core::classify;

/// Default include pattern, matched against paths relative to the root.
pub const DEFAULT_INCLUDE: &str = "*.json";

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Glob matched against each file's path relative to the root.
    pub include: String,
    pub follow_links: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.to_string(),
            follow_links: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// List files under `root` matching the include glob, sorted by path.
/// Junk directories are pruned; unreadable entries are skipped with a warning.
pub fn list_candidate_files(
    root: &Path,
    options: &DiscoveryOptions,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }
    let matcher = Glob::new(&options.include)
        .map_err(|source| DiscoveryError::InvalidGlob {
            pattern: options.include.clone(),
            source,
        })?
        .compile_matcher();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .into_iter()
        .filter_entry(|e| !ignore::is_ignored(e));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let rel_path = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matcher.is_match(rel_path) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    log::debug!("{} candidate files under {}", files.len(), root.display());
    Ok(files)
}

/// Read a candidate file as text.
pub fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Candidate files under `root` that classify as action manifests.
pub fn find_action_manifests(
    root: &Path,
    options: &DiscoveryOptions,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let manifests: Vec<PathBuf> = list_candidate_files(root, options)?
        .into_iter()
        .filter(|p| classify::is_action_manifest(p))
        .collect();
    log::info!(
        "found {} action manifests under {}",
        manifests.len(),
        root.display()
    );
    Ok(manifests)
}
