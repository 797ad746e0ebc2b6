use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::Result;
use locsync_backend::{BackendConfig, BackendKind, DEFAULT_DELAY, DEFAULT_TIMEOUT};
use locsync_domain::{DiffClass, MergeSummary};
use locsync_services::MergeOptions;

#[allow(clippy::too_many_arguments)]
pub fn run_merge(
    source: PathBuf,
    target: PathBuf,
    lang: String,
    source_lang: Option<String>,
    api: Option<String>,
    api_key: Option<String>,
    dry_run: bool,
    backup: bool,
    use_color: bool,
) -> Result<()> {
    tracing::debug!(
        source = ?source, target = ?target, lang = %lang,
        api = ?api, dry_run, backup
    );
    let cfg = locsync_config::load_config().unwrap_or_default();
    let backend_cfg = cfg.backend.unwrap_or_default();

    let source_lang = source_lang
        .or(cfg.source_lang)
        .unwrap_or_else(|| "en".to_string());
    let kind: BackendKind = api
        .or(backend_cfg.kind)
        .unwrap_or_else(|| "google".to_string())
        .parse()?;
    let timeout = backend_cfg
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    let delay = backend_cfg
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DELAY);

    let src_doc = locsync_services::load_document(&source)?;
    let prior = locsync_services::load_target_or_empty(&target);

    let gaps = locsync_services::diff(&src_doc, &prior)
        .iter()
        .filter(|e| e.class != DiffClass::Translated)
        .count();
    if gaps == 0 {
        println!("✔ Nothing to translate: {}", target.display());
        return Ok(());
    }
    if dry_run {
        println!(
            "DRY-RUN: {} key(s) would be translated into {}",
            gaps,
            target.display()
        );
        color_eyre::eyre::bail!("{gaps} key(s) need translation");
    }

    // Credential problems surface here, before any leaf is touched.
    let translator = BackendConfig::new(kind)
        .with_api_key(api_key.or(backend_cfg.api_key))
        .with_timeout(timeout)
        .build()?;

    let outcome = locsync_services::merge(
        &src_doc,
        &prior,
        translator.as_ref(),
        &MergeOptions {
            source_lang,
            target_lang: lang,
            delay,
        },
    );
    // Persist failure keeps the merge result in memory; the error carries
    // the path so a retry does not re-translate.
    locsync_services::save_document(&target, &outcome.document, backup)?;

    print_outcome(&outcome.summary, use_color);
    println!("✔ Saved to {}", target.display());

    if outcome.summary.failed > 0 {
        color_eyre::eyre::bail!("{} key(s) failed to translate", outcome.summary.failed);
    }
    Ok(())
}

fn print_outcome(summary: &MergeSummary, use_color: bool) {
    println!("Merge complete:");
    println!("  preserved:  {}", summary.preserved);
    println!("  translated: {}", summary.translated);
    println!("  skipped:    {}", summary.skipped);
    println!("  failed:     {}", summary.failed);
    for failure in &summary.failures {
        if use_color {
            use owo_colors::OwoColorize;
            println!("  ✗ {}: {}", failure.path.red(), failure.error);
        } else {
            println!("  ✗ {}: {}", failure.path, failure.error);
        }
    }
}
