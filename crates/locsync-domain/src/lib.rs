use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// How a source leaf relates to the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiffClass {
    /// No value at this path in the target.
    Missing,
    /// Target value is byte-identical to the source string; presumed never
    /// translated.
    Untranslated,
    /// Target has its own value (or the leaf is non-string and present).
    Translated,
}

/// A source key with no counterpart in the target document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MissingKey {
    pub path: String,
    pub source: serde_json::Value,
}

/// A key present in both documents whose target value equals the source.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UntranslatedKey {
    pub path: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiffSummary {
    pub missing_count: usize,
    pub untranslated_count: usize,
    pub total_missing: usize,
}

/// Structured report emitted by the report-only diff.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiffReport {
    pub schema_version: u32,
    pub source_file: String,
    pub target_file: String,
    pub missing_keys: Vec<MissingKey>,
    pub untranslated_keys: Vec<UntranslatedKey>,
    pub summary: DiffSummary,
}

/// A leaf whose backend translation failed; the source value was written
/// in its place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FailedKey {
    pub path: String,
    pub error: String,
}

/// Counts for one merge over a source/target document pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MergeSummary {
    pub preserved: usize,
    pub translated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failures: Vec<FailedKey>,
}

impl MergeSummary {
    /// Total number of source leaves accounted for.
    pub fn total(&self) -> usize {
        self.preserved + self.translated + self.skipped + self.failed
    }
}

/// Outcome of one language inside a multi-language sync run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SyncStatus {
    /// Nothing missing, nothing untranslated.
    Complete,
    /// Dry-run found gaps but did not merge.
    NeedsTranslation { missing: usize },
    /// Merge ran and the target was written.
    Synced { summary: MergeSummary },
    /// The language could not be processed at all.
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SyncLangResult {
    pub lang: String,
    #[serde(flatten)]
    pub status: SyncStatus,
}
