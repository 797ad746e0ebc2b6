//! High-level operations over localization document pairs.
//! Intentionally thin modules: diff classification, gap-filling merge,
//! document storage, report building, and the multi-language sync driver.

pub mod diff;
pub mod merge;
pub mod report;
pub mod store;
pub mod sync;

pub use locsync_core::Result;

pub use diff::{diff, ClassEntry};
pub use merge::{merge, MergeOptions, MergeOutcome};
pub use report::{build_diff_report, write_diff_report};
pub use store::{load_document, load_target_or_empty, save_document, StoreError};
pub use sync::{sync_all, SyncOptions, DEFAULT_TARGET_LANGS};
