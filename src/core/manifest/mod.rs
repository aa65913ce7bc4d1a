//! Action manifests: model, JSON codec, and validation rules.

mod codec;
mod model;
mod validation;

use std::io;
use std::path::PathBuf;

pub use codec::{deserialize, load, save, serialize};
pub use model::{Action, ActionSet, DefaultBinding, LocalizationBucket, Manifest};
pub use validation::{
    ActionType, Direction, Usage, ValidationOptions, validate, validate_all, validate_with,
    verify_action_path, verify_action_set_usage, verify_action_type,
};

/// Error loading or saving a manifest.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Malformed manifest: {0}")]
    MalformedInput(String),
    #[error("Failed to encode manifest: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A violated manifest rule, with the offending value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("action set name '{name}' does not match /actions/<name>")]
    MalformedActionSetName { name: String },
    #[error("malformed action path '{path}': expected /actions/<set>/<in|out>/<name>")]
    MalformedActionPath { path: String },
    #[error("unexpected segment '{found}' in action path '{path}', expected 'actions'")]
    UnexpectedPathSegment { path: String, found: String },
    #[error(
        "unknown action set '{set}' in action path '{path}' (known: {})",
        .known.join(", ")
    )]
    UnknownActionSet {
        path: String,
        set: String,
        known: Vec<String>,
    },
    #[error("unexpected io direction '{direction}' in action path '{path}', expected 'in' or 'out'")]
    InvalidDirection { path: String, direction: String },
    #[error("action name is empty in action path '{path}'")]
    EmptyActionName { path: String },
    #[error(
        "unexpected action type '{kind}' for '{action}', expected one of: {}",
        .expected.join(", ")
    )]
    InvalidActionType {
        action: String,
        kind: String,
        expected: Vec<&'static str>,
    },
    #[error(
        "unexpected usage '{usage}' for action set '{set}', expected one of: {}",
        .expected.join(", ")
    )]
    InvalidUsage {
        set: String,
        usage: String,
        expected: Vec<&'static str>,
    },
}
