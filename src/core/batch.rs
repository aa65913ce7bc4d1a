//! Validate manifest files one at a time or in batches. A failing file never
//! stops the rest of the batch.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::manifest::{self, CodecError, ValidationError, ValidationOptions};

/// Why one file failed.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Every violation, when collecting instead of failing fast.
    #[error("{} violations: {}", .0.len(), join_errors(.0))]
    Violations(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// How files are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub validation: ValidationOptions,
    /// Report every violation per file instead of only the first.
    pub all_errors: bool,
}

/// Load and validate one file, keeping the error.
pub fn validate_file_detailed(path: &Path, options: &BatchOptions) -> Result<(), FileError> {
    let manifest = manifest::load(path)?;
    if options.all_errors {
        let errors = manifest::validate_all(&manifest, &options.validation);
        if !errors.is_empty() {
            return Err(FileError::Violations(errors));
        }
        return Ok(());
    }
    manifest::validate_with(&manifest, &options.validation)?;
    Ok(())
}

/// Load and validate one file. Any load or validation error yields `false`.
pub fn validate_file(path: &Path, options: &BatchOptions) -> bool {
    validate_file_detailed(path, options).is_ok()
}

/// Outcome for one file in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub ok: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl FileOutcome {
    fn from_result(path: &Path, result: Result<(), FileError>) -> Self {
        let errors = match result {
            Ok(()) => vec![],
            Err(FileError::Violations(errors)) => errors.iter().map(|e| e.to_string()).collect(),
            Err(e) => vec![e.to_string()],
        };
        Self {
            path: path.to_path_buf(),
            ok: errors.is_empty(),
            errors,
        }
    }
}

/// Per-file outcomes, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn passed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.ok)
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.ok)
    }

    pub fn all_passed(&self) -> bool {
        self.files.iter().all(|f| f.ok)
    }
}

/// Validate each file, logging and recording failures, and carry on.
pub fn validate_files<P: AsRef<Path>>(paths: &[P], options: &BatchOptions) -> BatchReport {
    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        let result = validate_file_detailed(path, options);
        if let Err(ref e) = result {
            log::warn!("{}: {}", path.display(), e);
        } else {
            log::debug!("{}: ok", path.display());
        }
        report.files.push(FileOutcome::from_result(path, result));
    }
    log::info!(
        "validated {} files, {} failed",
        report.files.len(),
        report.failed().count()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID: &str = r#"{
        "actions": [{"name": "/actions/main/in/Jump", "requirement": "mandatory", "type": "boolean"}],
        "action_sets": [{"name": "/actions/main", "usage": "leftright"}]
    }"#;

    const BAD_TYPE_AND_SET: &str = r#"{
        "actions": [
            {"name": "/actions/other/in/Jump", "type": "boolean"},
            {"name": "/actions/main/in/Fire", "type": "trigger"}
        ],
        "action_sets": [{"name": "/actions/main", "usage": "wrong"}]
    }"#;

    fn fixture() -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempfile::TempDir::new().unwrap();
        let files = [
            ("valid.json", VALID),
            ("broken.json", "{ nope"),
            ("invalid.json", BAD_TYPE_AND_SET),
        ];
        let paths = files
            .iter()
            .map(|(name, content)| {
                let p = dir.path().join(name);
                fs::write(&p, content).unwrap();
                p
            })
            .collect();
        (dir, paths)
    }

    #[test]
    fn validate_file_true_for_valid() {
        let (_dir, paths) = fixture();
        assert!(validate_file(&paths[0], &BatchOptions::default()));
    }

    #[test]
    fn validate_file_false_for_parse_and_rule_errors() {
        let (dir, paths) = fixture();
        assert!(!validate_file(&paths[1], &BatchOptions::default()));
        assert!(!validate_file(&paths[2], &BatchOptions::default()));
        assert!(!validate_file(
            &dir.path().join("missing.json"),
            &BatchOptions::default()
        ));
    }

    #[test]
    fn validate_file_false_without_action_sets() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("actions.json");
        fs::write(&path, r#"{"actions": []}"#).unwrap();
        assert!(!validate_file(&path, &BatchOptions::default()));
        assert!(matches!(
            validate_file_detailed(&path, &BatchOptions::default()),
            Err(FileError::Codec(CodecError::MalformedInput(_)))
        ));
    }

    #[test]
    fn detailed_keeps_error_kind() {
        let (_dir, paths) = fixture();
        let opts = BatchOptions::default();
        assert!(matches!(
            validate_file_detailed(&paths[1], &opts),
            Err(FileError::Codec(CodecError::MalformedInput(_)))
        ));
        assert!(matches!(
            validate_file_detailed(&paths[2], &opts),
            Err(FileError::Validation(ValidationError::UnknownActionSet { .. }))
        ));
    }

    #[test]
    fn all_errors_collects_violations() {
        let (_dir, paths) = fixture();
        let opts = BatchOptions {
            validation: ValidationOptions::strict(),
            all_errors: true,
        };
        match validate_file_detailed(&paths[2], &opts) {
            Err(FileError::Violations(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected Violations, got {:?}", other),
        }
    }

    #[test]
    fn batch_continues_past_failures() {
        let (_dir, paths) = fixture();
        let report = validate_files(&paths, &BatchOptions::default());
        assert_eq!(report.files.len(), 3);
        assert!(!report.all_passed());
        let passed: Vec<_> = report.passed().map(|f| f.path.clone()).collect();
        assert_eq!(passed, vec![paths[0].clone()]);
        assert_eq!(report.failed().count(), 2);
        assert!(report.files[1].errors[0].contains("Malformed manifest"));
    }

    #[test]
    fn report_serializes_without_empty_errors() {
        let (_dir, paths) = fixture();
        let report = validate_files(&paths[..1], &BatchOptions::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files"][0]["ok"], true);
        assert!(json["files"][0].get("errors").is_none());
    }
}
