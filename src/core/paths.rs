//! Default locations on disk.

use std::path::PathBuf;

/// Library folder of a default Steam install on this platform
/// (e.g. `~/.steam/steam/steamapps/common`). Not checked for existence.
pub fn default_library_dir() -> Option<PathBuf> {
    let home = directories::BaseDirs::new()?.home_dir().to_path_buf();
    let steam_root = if cfg!(windows) {
        PathBuf::from(r"C:\Program Files (x86)\Steam")
    } else if cfg!(target_os = "macos") {
        home.join("Library/Application Support/Steam")
    } else {
        home.join(".steam/steam")
    };
    Some(steam_root.join("steamapps").join("common"))
}
