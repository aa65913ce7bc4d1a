//! Directories pruned while walking a library for manifests.

/// Directories never searched: VCS metadata, dependency trees, build output.
const IGNORED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "target",
    "__pycache__",
    ".venv",
    ".cache",
];

/// Returns `true` if this directory entry should be pruned from traversal.
/// The walk root itself is never pruned.
pub fn is_ignored(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|n| IGNORED_DIRS.contains(&n))
}
