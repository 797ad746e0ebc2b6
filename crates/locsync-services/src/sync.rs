use std::path::PathBuf;
use std::time::Duration;

use locsync_backend::Translator;
use locsync_domain::{DiffClass, SyncLangResult, SyncStatus};

use crate::diff::diff;
use crate::merge::{merge, MergeOptions};
use crate::store::{self, StoreError};

/// Languages the pipeline targets when none are configured.
pub const DEFAULT_TARGET_LANGS: [&str; 6] = ["ar", "vi", "th", "zh", "ja", "ko"];

#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Directory holding one `<lang>.json` document per language.
    pub locales_dir: PathBuf,
    pub source_lang: String,
    pub langs: Vec<String>,
    pub dry_run: bool,
    pub backup: bool,
    pub delay: Duration,
}

/// Drive diff (and merge, unless dry-run) across every target language
/// against one shared read-only source snapshot.
///
/// A source that cannot be loaded is fatal; everything per-language is
/// contained in that language's result. Without a translator the run only
/// reports, like dry-run.
pub fn sync_all(
    translator: Option<&dyn Translator>,
    opts: &SyncOptions,
) -> Result<Vec<SyncLangResult>, StoreError> {
    let source_path = opts.locales_dir.join(format!("{}.json", opts.source_lang));
    let source = store::load_document(&source_path)?;

    let mut results = Vec::new();
    for lang in &opts.langs {
        if lang == &opts.source_lang {
            continue;
        }
        let target_path = opts.locales_dir.join(format!("{lang}.json"));
        tracing::info!(lang = %lang, target = %target_path.display(), "sync language");
        let prior = store::load_target_or_empty(&target_path);
        let gaps = diff(&source, &prior)
            .iter()
            .filter(|e| e.class != DiffClass::Translated)
            .count();

        let status = if gaps == 0 {
            SyncStatus::Complete
        } else {
            match (opts.dry_run, translator) {
                (false, Some(translator)) => {
                    let outcome = merge(
                        &source,
                        &prior,
                        translator,
                        &MergeOptions {
                            source_lang: opts.source_lang.clone(),
                            target_lang: lang.clone(),
                            delay: opts.delay,
                        },
                    );
                    match store::save_document(&target_path, &outcome.document, opts.backup) {
                        Ok(()) => SyncStatus::Synced {
                            summary: outcome.summary,
                        },
                        // The merge result is gone for this run, but the
                        // document on disk is still the prior one; report
                        // and move on to the next language.
                        Err(err) => SyncStatus::Failed {
                            error: err.to_string(),
                        },
                    }
                }
                _ => SyncStatus::NeedsTranslation { missing: gaps },
            }
        };
        results.push(SyncLangResult {
            lang: lang.clone(),
            status,
        });
    }
    Ok(results)
}
