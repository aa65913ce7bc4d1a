//! Manifest rules: action paths, known action sets, action types, set usages.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::ValidationError;
use super::model::{Action, ActionSet, Manifest};

/// Kinds of input an action can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionType {
    Boolean,
    Vector1,
    Vector2,
    Vector3,
    Vibration,
    Pose,
    Skeleton,
}

impl ActionType {
    pub const ALL: [ActionType; 7] = [
        Self::Boolean,
        Self::Vector1,
        Self::Vector2,
        Self::Vector3,
        Self::Vibration,
        Self::Pose,
        Self::Skeleton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Vector1 => "vector1",
            Self::Vector2 => "vector2",
            Self::Vector3 => "vector3",
            Self::Vibration => "vibration",
            Self::Pose => "pose",
            Self::Skeleton => "skeleton",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

/// How an action set is presented to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Usage {
    /// One set of bindings for both hands.
    Single,
    /// Separate bindings per hand.
    LeftRight,
    /// Not shown in the binding UI.
    Hidden,
}

impl Usage {
    pub const ALL: [Usage; 3] = [Self::Single, Self::LeftRight, Self::Hidden];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::LeftRight => "leftright",
            Self::Hidden => "hidden",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

/// Direction segment of an action path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Self::In, Self::Out];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

macro_rules! str_enum_traits {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or(())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum_traits!(ActionType);
str_enum_traits!(Usage);
str_enum_traits!(Direction);

/// Which optional rules to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Check every action set's usage against `Usage::ALL`. Off by default:
    /// shipped manifests are not held to this rule.
    pub check_usage: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self { check_usage: true }
    }
}

static ACTION_SET_NAME: OnceLock<Regex> = OnceLock::new();

fn action_set_name_re() -> &'static Regex {
    ACTION_SET_NAME.get_or_init(|| Regex::new(r"^/actions/(.+)$").expect("valid regex"))
}

/// Short name of an action set (`/actions/main` -> `main`).
fn action_set_short_name(set: &ActionSet) -> Result<&str, ValidationError> {
    action_set_name_re()
        .captures(&set.name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ValidationError::MalformedActionSetName {
            name: set.name.clone(),
        })
}

/// Check an action path of the form `/actions/<set>/<in|out>/<name>` against the
/// known action set short names.
pub fn verify_action_path(path: &str, action_sets: &HashSet<&str>) -> Result<(), ValidationError> {
    let fields: Vec<&str> = path.split('/').collect();
    let [prefix, actions, set, direction, name] = fields.as_slice() else {
        return Err(ValidationError::MalformedActionPath {
            path: path.to_string(),
        });
    };
    if !prefix.is_empty() {
        return Err(ValidationError::MalformedActionPath {
            path: path.to_string(),
        });
    }
    if *actions != "actions" {
        return Err(ValidationError::UnexpectedPathSegment {
            path: path.to_string(),
            found: actions.to_string(),
        });
    }
    if !action_sets.contains(set) {
        let mut known: Vec<String> = action_sets.iter().map(|s| s.to_string()).collect();
        known.sort();
        return Err(ValidationError::UnknownActionSet {
            path: path.to_string(),
            set: set.to_string(),
            known,
        });
    }
    if direction.parse::<Direction>().is_err() {
        return Err(ValidationError::InvalidDirection {
            path: path.to_string(),
            direction: direction.to_string(),
        });
    }
    if name.is_empty() {
        return Err(ValidationError::EmptyActionName {
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Check an action's `type` against `ActionType::ALL`.
pub fn verify_action_type(action: &Action) -> Result<(), ValidationError> {
    match action.kind.parse::<ActionType>() {
        Ok(_) => Ok(()),
        Err(()) => Err(ValidationError::InvalidActionType {
            action: action.name.clone(),
            kind: action.kind.clone(),
            expected: ActionType::names(),
        }),
    }
}

/// Check an action set's `usage` against `Usage::ALL`.
pub fn verify_action_set_usage(set: &ActionSet) -> Result<(), ValidationError> {
    match set.usage.parse::<Usage>() {
        Ok(_) => Ok(()),
        Err(()) => Err(ValidationError::InvalidUsage {
            set: set.name.clone(),
            usage: set.usage.clone(),
            expected: Usage::names(),
        }),
    }
}

/// Validate with default options. Stops at the first violation.
pub fn validate(manifest: &Manifest) -> Result<(), ValidationError> {
    validate_with(manifest, &ValidationOptions::default())
}

/// Validate with the given options. Stops at the first violation.
pub fn validate_with(
    manifest: &Manifest,
    options: &ValidationOptions,
) -> Result<(), ValidationError> {
    let mut short_names = HashSet::new();
    for set in manifest.action_sets() {
        short_names.insert(action_set_short_name(set)?);
        if options.check_usage {
            verify_action_set_usage(set)?;
        }
    }
    for action in manifest.actions() {
        verify_action_path(&action.name, &short_names)?;
        verify_action_type(action)?;
    }
    Ok(())
}

/// Same rules as `validate_with`, but reports every violation: action sets
/// first, then actions, each in declaration order. At most one path violation
/// is reported per action, plus its type violation.
pub fn validate_all(manifest: &Manifest, options: &ValidationOptions) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut short_names = HashSet::new();
    for set in manifest.action_sets() {
        match action_set_short_name(set) {
            Ok(name) => {
                short_names.insert(name);
            }
            Err(e) => errors.push(e),
        }
        if options.check_usage
            && let Err(e) = verify_action_set_usage(set)
        {
            errors.push(e);
        }
    }
    for action in manifest.actions() {
        if let Err(e) = verify_action_path(&action.name, &short_names) {
            errors.push(e);
        }
        if let Err(e) = verify_action_type(action) {
            errors.push(e);
        }
    }
    errors
}
