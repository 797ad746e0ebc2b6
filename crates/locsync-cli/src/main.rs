use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::{error, info};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;

#[derive(Parser)]
#[command(name = "locsync", version, about = "Localization document sync toolkit")]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report missing and untranslated keys for a source/target pair
    Check {
        #[arg(short, long)]
        source: PathBuf,
        #[arg(short, long)]
        target: PathBuf,
        /// Write a structured JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,
        /// Max keys listed per category on the console
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fill gaps in a target document through a translation backend
    Merge {
        #[arg(short, long)]
        source: PathBuf,
        #[arg(short, long)]
        target: PathBuf,
        /// Target language code (two-letter lowercase)
        #[arg(long)]
        lang: String,
        #[arg(long)]
        source_lang: Option<String>,
        /// Translation backend: google or deepl
        #[arg(long)]
        api: Option<String>,
        /// API key (required by deepl)
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        #[arg(long, default_value_t = false)]
        backup: bool,
    },

    /// Sync every target language in a locales directory
    Sync {
        /// Directory holding one <lang>.json per language
        #[arg(long)]
        locales_dir: Option<PathBuf>,
        /// Comma-separated target language codes
        #[arg(long, value_delimiter = ',')]
        langs: Vec<String>,
        #[arg(long)]
        source_lang: Option<String>,
        #[arg(long)]
        api: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        #[arg(long, default_value_t = false)]
        backup: bool,
    },
}

trait Runnable {
    fn run(self, use_color: bool) -> Result<()>;
}

impl Runnable for Commands {
    fn run(self, use_color: bool) -> Result<()> {
        let cmd_name = format!("{:?}", self);
        info!("▶ Starting command: {}", cmd_name);

        let result = match self {
            Commands::Check {
                source,
                target,
                report,
                limit,
            } => commands::check::run_check(source, target, report, limit, use_color),

            Commands::Merge {
                source,
                target,
                lang,
                source_lang,
                api,
                api_key,
                dry_run,
                backup,
            } => commands::merge::run_merge(
                source,
                target,
                lang,
                source_lang,
                api,
                api_key,
                dry_run,
                backup,
                use_color,
            ),

            Commands::Sync {
                locales_dir,
                langs,
                source_lang,
                api,
                api_key,
                dry_run,
                backup,
            } => commands::sync::run_sync(
                locales_dir,
                langs,
                source_lang,
                api,
                api_key,
                dry_run,
                backup,
                use_color,
            ),
        };

        match &result {
            Ok(_) => info!("✔ Finished command: {}", cmd_name),
            Err(e) => error!("✖ Command {} failed: {:?}", cmd_name, e),
        }

        result
    }
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily("logs", "locsync.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = init_tracing();

    let cli = Cli::parse();

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    cli.cmd.run(use_color)
}
