use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::Result;
use locsync_backend::{BackendConfig, BackendKind, Translator, DEFAULT_DELAY, DEFAULT_TIMEOUT};
use locsync_domain::{SyncLangResult, SyncStatus};
use locsync_services::{SyncOptions, DEFAULT_TARGET_LANGS};

#[allow(clippy::too_many_arguments)]
pub fn run_sync(
    locales_dir: Option<PathBuf>,
    langs: Vec<String>,
    source_lang: Option<String>,
    api: Option<String>,
    api_key: Option<String>,
    dry_run: bool,
    backup: bool,
    use_color: bool,
) -> Result<()> {
    tracing::debug!(locales_dir = ?locales_dir, langs = ?langs, dry_run, backup);
    let cfg = locsync_config::load_config().unwrap_or_default();
    let backend_cfg = cfg.backend.unwrap_or_default();

    let Some(locales_dir) = locales_dir.or(cfg.locales_dir.map(PathBuf::from)) else {
        color_eyre::eyre::bail!("--locales-dir is required (or set locales_dir in locsync.toml)");
    };
    let source_lang = source_lang
        .or(cfg.source_lang)
        .unwrap_or_else(|| "en".to_string());
    let langs = if !langs.is_empty() {
        langs
    } else if let Some(configured) = cfg.target_langs {
        configured
    } else {
        DEFAULT_TARGET_LANGS.iter().map(|l| l.to_string()).collect()
    };

    let translator: Option<Box<dyn Translator>> = if dry_run {
        None
    } else {
        let kind: BackendKind = api
            .or(backend_cfg.kind)
            .unwrap_or_else(|| "google".to_string())
            .parse()?;
        let timeout = backend_cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Some(
            BackendConfig::new(kind)
                .with_api_key(api_key.or(backend_cfg.api_key))
                .with_timeout(timeout)
                .build()?,
        )
    };
    let delay = backend_cfg
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DELAY);

    let results = locsync_services::sync_all(
        translator.as_deref(),
        &SyncOptions {
            locales_dir,
            source_lang,
            langs,
            dry_run,
            backup,
            delay,
        },
    )?;

    print_results(&results, use_color);

    let failed: Vec<&str> = results
        .iter()
        .filter(|r| matches!(r.status, SyncStatus::Failed { .. }))
        .map(|r| r.lang.as_str())
        .collect();
    if !failed.is_empty() {
        color_eyre::eyre::bail!("sync failed for: {}", failed.join(", "));
    }
    Ok(())
}

fn print_results(results: &[SyncLangResult], use_color: bool) {
    println!("Sync summary:");
    for result in results {
        let line = match &result.status {
            SyncStatus::Complete => format!("✔ {}: up to date", result.lang),
            SyncStatus::NeedsTranslation { missing } => {
                format!("⚠ {}: {} key(s) need translation", result.lang, missing)
            }
            SyncStatus::Synced { summary } => format!(
                "✔ {}: translated {} / skipped {} / preserved {} / failed {}",
                result.lang,
                summary.translated,
                summary.skipped,
                summary.preserved,
                summary.failed
            ),
            SyncStatus::Failed { error } => format!("✗ {}: {}", result.lang, error),
        };
        if use_color {
            use owo_colors::OwoColorize;
            match &result.status {
                SyncStatus::Complete | SyncStatus::Synced { .. } => println!("{}", line.green()),
                SyncStatus::NeedsTranslation { .. } => println!("{}", line.yellow()),
                SyncStatus::Failed { .. } => println!("{}", line.red()),
            }
        } else {
            println!("{line}");
        }
    }
}
