//! In-memory action manifest: actions, action sets, default bindings, localization.
//!
//! Builder operations accept any strings. Nothing is checked here; see
//! `validation` for the rules a manifest must satisfy.

use serde::{Deserialize, Serialize};

/// Key holding a bucket's tag in the serialized form; never stored as an entry.
pub(super) const LANGUAGE_TAG: &str = "language_tag";

/// One bindable input, identified by a path like `/actions/main/in/Jump`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub requirement: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Controller type -> binding file URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBinding {
    pub controller_type: String,
    pub binding_url: String,
}

/// A named group of actions (`/actions/<set>`) with its usage mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub name: String,
    #[serde(default)]
    pub usage: String,
}

/// Translated strings for one language tag, kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalizationBucket {
    pub(super) language_tag: String,
    pub(super) entries: Vec<(String, String)>,
}

impl LocalizationBucket {
    pub fn new(language_tag: impl Into<String>) -> Self {
        Self {
            language_tag: language_tag.into(),
            entries: Vec::new(),
        }
    }

    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set `key` to `value`. An existing key keeps its position.
    /// `language_tag` is reserved for the bucket's tag and is ignored.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == LANGUAGE_TAG {
            log::warn!(
                "ignoring reserved localization key '{}' in bucket '{}'",
                LANGUAGE_TAG,
                self.language_tag
            );
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// Aggregate root. Collections are append-only and keep declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub(super) actions: Vec<Action>,
    pub(super) default_bindings: Vec<DefaultBinding>,
    pub(super) action_sets: Vec<ActionSet>,
    pub(super) localization: Vec<LocalizationBucket>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_action(
        &mut self,
        name: impl Into<String>,
        requirement: impl Into<String>,
        kind: impl Into<String>,
    ) {
        self.actions.push(Action {
            name: name.into(),
            requirement: requirement.into(),
            kind: kind.into(),
        });
    }

    pub fn add_default_binding(
        &mut self,
        controller_type: impl Into<String>,
        binding_url: impl Into<String>,
    ) {
        self.default_bindings.push(DefaultBinding {
            controller_type: controller_type.into(),
            binding_url: binding_url.into(),
        });
    }

    pub fn add_action_set(&mut self, name: impl Into<String>, usage: impl Into<String>) {
        self.action_sets.push(ActionSet {
            name: name.into(),
            usage: usage.into(),
        });
    }

    /// Upsert `key = value` in the bucket for `language_tag`, creating the bucket
    /// on first use. There is never more than one bucket per tag.
    pub fn add_localization_entry(
        &mut self,
        language_tag: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let index = match self.bucket_index(language_tag) {
            Some(i) => i,
            None => {
                self.localization.push(LocalizationBucket::new(language_tag));
                self.localization.len() - 1
            }
        };
        self.localization[index].set(key, value);
    }

    pub(super) fn bucket_index(&self, language_tag: &str) -> Option<usize> {
        self.localization
            .iter()
            .position(|b| b.language_tag == language_tag)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn default_bindings(&self) -> &[DefaultBinding] {
        &self.default_bindings
    }

    pub fn action_sets(&self) -> &[ActionSet] {
        &self.action_sets
    }

    pub fn localization(&self) -> &[LocalizationBucket] {
        &self.localization
    }

    pub fn localization_bucket(&self, language_tag: &str) -> Option<&LocalizationBucket> {
        self.bucket_index(language_tag).map(|i| &self.localization[i])
    }
}
