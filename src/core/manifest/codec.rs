//! JSON form of a manifest, as written by the tools that produce action files.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::discovery;

use super::CodecError;
use super::model::{
    Action, ActionSet, DefaultBinding, LANGUAGE_TAG, LocalizationBucket, Manifest,
};

const INDENT: &[u8] = b"    ";

/// Borrowed view used for writing; field order here is the order on disk.
#[derive(Serialize)]
struct ManifestFileRef<'a> {
    actions: &'a [Action],
    default_bindings: &'a [DefaultBinding],
    action_sets: &'a [ActionSet],
    localization: &'a [LocalizationBucket],
}

/// JSON structure on disk. `actions` and `action_sets` are required; bindings and
/// localization are often left out of shipped manifests.
#[derive(Deserialize)]
struct ManifestFile {
    actions: Vec<Action>,
    #[serde(default)]
    default_bindings: Vec<DefaultBinding>,
    action_sets: Vec<ActionSet>,
    #[serde(default)]
    localization: Vec<LocalizationBucket>,
}

impl Serialize for LocalizationBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        map.serialize_entry(LANGUAGE_TAG, &self.language_tag)?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LocalizationBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BucketVisitor;

        impl<'de> Visitor<'de> for BucketVisitor {
            type Value = LocalizationBucket;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of strings with a language_tag")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut tag: Option<String> = None;
                let mut bucket = LocalizationBucket::new(String::new());
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    if key == LANGUAGE_TAG {
                        if tag.is_some() {
                            return Err(de::Error::duplicate_field(LANGUAGE_TAG));
                        }
                        tag = Some(value);
                    } else {
                        bucket.set(key, value);
                    }
                }
                bucket.language_tag = tag.ok_or_else(|| de::Error::missing_field(LANGUAGE_TAG))?;
                Ok(bucket)
            }
        }

        deserializer.deserialize_map(BucketVisitor)
    }
}

/// Encode a manifest as pretty JSON (4-space indent), preserving declaration order.
pub fn serialize(manifest: &Manifest) -> Result<String, CodecError> {
    let file = ManifestFileRef {
        actions: &manifest.actions,
        default_bindings: &manifest.default_bindings,
        action_sets: &manifest.action_sets,
        localization: &manifest.localization,
    };
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut writer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    file.serialize(&mut writer).map_err(CodecError::Encode)?;
    String::from_utf8(buf).map_err(|e| CodecError::Encode(ser::Error::custom(e)))
}

/// Parse manifest JSON. Does not validate; see `validate`.
pub fn deserialize(text: &str) -> Result<Manifest, CodecError> {
    let file: ManifestFile =
        serde_json::from_str(text).map_err(|e| CodecError::MalformedInput(e.to_string()))?;

    let mut manifest = Manifest {
        actions: file.actions,
        default_bindings: file.default_bindings,
        action_sets: file.action_sets,
        localization: Vec::with_capacity(file.localization.len()),
    };
    // Repeated language tags are merged so there is one bucket per tag.
    for bucket in file.localization {
        match manifest.bucket_index(&bucket.language_tag) {
            Some(i) => {
                log::debug!("merging repeated localization bucket '{}'", bucket.language_tag);
                for (key, value) in bucket.entries {
                    manifest.localization[i].set(key, value);
                }
            }
            None => manifest.localization.push(bucket),
        }
    }
    Ok(manifest)
}

/// Read and parse a manifest file.
pub fn load(path: &Path) -> Result<Manifest, CodecError> {
    let text = discovery::read_file(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize(&text)
}

/// Write a manifest to `path`, replacing any existing file.
pub fn save(manifest: &Manifest, path: &Path) -> Result<(), CodecError> {
    let json = serialize(manifest)?;
    fs::write(path, json).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })
}
