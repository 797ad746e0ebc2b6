use std::path::PathBuf;

use color_eyre::eyre::Result;
use locsync_domain::DiffReport;

use super::preview;

pub fn run_check(
    source: PathBuf,
    target: PathBuf,
    report: Option<PathBuf>,
    limit: Option<usize>,
    use_color: bool,
) -> Result<()> {
    tracing::debug!(source = ?source, target = ?target, report = ?report, limit = ?limit);
    let cfg = locsync_config::load_config().unwrap_or_default();
    let limit = limit.or(cfg.list_limit).unwrap_or(10);

    let src_doc = locsync_services::load_document(&source)?;
    let trg_doc = locsync_services::load_target_or_empty(&target);
    let entries = locsync_services::diff(&src_doc, &trg_doc);
    let diff_report = locsync_services::build_diff_report(
        &source.display().to_string(),
        &target.display().to_string(),
        &entries,
    );

    print_summary(&diff_report, limit, use_color);

    if let Some(path) = report {
        locsync_services::write_diff_report(&path, &diff_report)?;
        println!("✔ Report saved to {}", path.display());
    }

    if diff_report.summary.total_missing > 0 {
        color_eyre::eyre::bail!(
            "{} key(s) missing or untranslated",
            diff_report.summary.total_missing
        );
    }
    Ok(())
}

fn print_summary(report: &DiffReport, limit: usize, use_color: bool) {
    println!("Check result: {}", report.target_file);
    println!("Missing keys: {}", report.summary.missing_count);
    println!("Untranslated keys: {}", report.summary.untranslated_count);

    if !report.missing_keys.is_empty() {
        println!();
        println!("Missing:");
        for item in report.missing_keys.iter().take(limit) {
            let value = match &item.source {
                serde_json::Value::String(s) => preview(s, 50),
                other => preview(&other.to_string(), 50),
            };
            print_key_line(&item.path, &value, use_color);
        }
        if report.missing_keys.len() > limit {
            println!("  … {} more", report.missing_keys.len() - limit);
        }
    }

    if !report.untranslated_keys.is_empty() {
        println!();
        println!("Untranslated (target equals source):");
        for item in report.untranslated_keys.iter().take(limit) {
            print_key_line(&item.path, &preview(&item.source, 50), use_color);
        }
        if report.untranslated_keys.len() > limit {
            println!("  … {} more", report.untranslated_keys.len() - limit);
        }
    }
}

fn print_key_line(path: &str, value: &str, use_color: bool) {
    if use_color {
        use owo_colors::OwoColorize;
        println!("  - {}: {}", path.green(), value);
    } else {
        println!("  - {path}: {value}");
    }
}
