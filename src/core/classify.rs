//! Cheap shape check used to pick action manifests out of arbitrary JSON files.

use std::path::Path;

use serde_json::Value;

use crate::core::discovery;

/// Whether a parsed document looks like an action manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    LooksLikeManifest,
    NotAManifest,
}

impl Classification {
    pub fn is_manifest(self) -> bool {
        self == Self::LooksLikeManifest
    }
}

/// A document looks like a manifest when it has a top-level `actions` array.
/// The array's contents are not inspected.
pub fn classify(doc: &Value) -> Classification {
    match doc.get("actions") {
        Some(Value::Array(_)) => Classification::LooksLikeManifest,
        _ => Classification::NotAManifest,
    }
}

/// Parse then classify. Text that is not JSON is simply not a manifest.
pub fn classify_text(text: &str) -> Classification {
    match serde_json::from_str::<Value>(text) {
        Ok(doc) => classify(&doc),
        Err(e) => {
            log::debug!("not JSON: {}", e);
            Classification::NotAManifest
        }
    }
}

/// Read `path` and classify it. Unreadable files are not manifests.
pub fn is_action_manifest(path: &Path) -> bool {
    match discovery::read_file(path) {
        Ok(text) => classify_text(&text).is_manifest(),
        Err(e) => {
            log::debug!("skipping {}: {}", path.display(), e);
            false
        }
    }
}
