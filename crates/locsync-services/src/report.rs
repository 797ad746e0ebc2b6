use std::path::Path;

use locsync_domain::{
    DiffClass, DiffReport, DiffSummary, MissingKey, UntranslatedKey, SCHEMA_VERSION,
};

use crate::diff::ClassEntry;
use crate::store::StoreError;

/// Shape a diff classification into the structured report file format.
pub fn build_diff_report(source_file: &str, target_file: &str, entries: &[ClassEntry]) -> DiffReport {
    let mut missing_keys = Vec::new();
    let mut untranslated_keys = Vec::new();
    for entry in entries {
        match entry.class {
            DiffClass::Missing => missing_keys.push(MissingKey {
                path: entry.path.to_string(),
                source: serde_json::to_value(&entry.source).unwrap_or(serde_json::Value::Null),
            }),
            DiffClass::Untranslated => {
                // Untranslated only arises for string leaves on both sides.
                if let (Some(source), Some(target)) = (
                    entry.source.as_str(),
                    entry.target.as_ref().and_then(|t| t.as_str()),
                ) {
                    untranslated_keys.push(UntranslatedKey {
                        path: entry.path.to_string(),
                        source: source.to_string(),
                        target: target.to_string(),
                    });
                }
            }
            DiffClass::Translated => {}
        }
    }
    let summary = DiffSummary {
        missing_count: missing_keys.len(),
        untranslated_count: untranslated_keys.len(),
        total_missing: missing_keys.len() + untranslated_keys.len(),
    };
    DiffReport {
        schema_version: SCHEMA_VERSION,
        source_file: source_file.to_string(),
        target_file: target_file.to_string(),
        missing_keys,
        untranslated_keys,
        summary,
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_diff_report(path: &Path, report: &DiffReport) -> Result<(), StoreError> {
    let mut text = serde_json::to_string_pretty(report).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    })
}
