//! Settings from the environment (and `.env`), overridable from the command line.

use std::env;
use std::path::{Path, PathBuf};

use crate::core::discovery::DEFAULT_INCLUDE;
use crate::core::paths;

const ROOT_VAR: &str = "ACTION_MANIFEST_ROOT";
const STRICT_USAGE_VAR: &str = "ACTION_MANIFEST_STRICT_USAGE";
const INCLUDE_VAR: &str = "ACTION_MANIFEST_INCLUDE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned when no root is given on the command line.
    pub root: Option<PathBuf>,
    /// Validate action set usages as well.
    pub strict_usage: bool,
    /// Glob for candidate files, relative to the root.
    pub include: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No directory to scan: pass ROOT or set ACTION_MANIFEST_ROOT")]
    NoRoot,
}

impl Config {
    /// Load from process environment variables.
    ///
    /// - `ACTION_MANIFEST_ROOT`: directory to scan (default: the Steam library)
    /// - `ACTION_MANIFEST_STRICT_USAGE`: 1 or true to check usages
    /// - `ACTION_MANIFEST_INCLUDE`: candidate glob (default `*.json`)
    pub fn load() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let root = get(ROOT_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .or_else(paths::default_library_dir);

        let strict_usage = get(STRICT_USAGE_VAR)
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let include = get(INCLUDE_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INCLUDE.to_string());

        Self {
            root,
            strict_usage,
            include,
        }
    }

    /// The command-line root if given, else the configured one.
    pub fn resolve_root(&self, arg: Option<&Path>) -> Result<PathBuf, ConfigError> {
        arg.map(Path::to_path_buf)
            .or_else(|| self.root.clone())
            .ok_or(ConfigError::NoRoot)
    }
}
