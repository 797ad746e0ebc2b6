use serde::Deserialize;

/// Workspace/user configuration. Every field is optional; the CLI resolves
/// effective values as CLI flag, then config, then built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocSyncConfig {
    pub source_lang: Option<String>,
    pub target_langs: Option<Vec<String>>,
    pub locales_dir: Option<String>,
    /// Cap for per-key console listings in diff output.
    pub list_limit: Option<usize>,
    pub backend: Option<BackendCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendCfg {
    /// "google" or "deepl".
    pub kind: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Pause between successive backend calls, in milliseconds.
    pub delay_ms: Option<u64>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Other(String),
}

/// Search order: CWD/locsync.toml, then $CONFIG_DIR/locsync/locsync.toml.
/// Earlier files win field by field.
pub fn load_config() -> Result<LocSyncConfig, ConfigError> {
    let mut merged = LocSyncConfig::default();
    if let Ok(p) = std::env::current_dir() {
        let path = p.join("locsync.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<LocSyncConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    if let Some(base) = dirs::config_dir() {
        let path = base.join("locsync").join("locsync.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<LocSyncConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    Ok(merged)
}

fn merge(mut a: LocSyncConfig, b: LocSyncConfig) -> LocSyncConfig {
    if a.source_lang.is_none() {
        a.source_lang = b.source_lang;
    }
    if a.target_langs.is_none() {
        a.target_langs = b.target_langs;
    }
    if a.locales_dir.is_none() {
        a.locales_dir = b.locales_dir;
    }
    if a.list_limit.is_none() {
        a.list_limit = b.list_limit;
    }
    a.backend = merge_opt(a.backend, b.backend, merge_backend);
    a
}

fn merge_opt<T: Default>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_backend(mut a: BackendCfg, b: BackendCfg) -> BackendCfg {
    if a.kind.is_none() {
        a.kind = b.kind;
    }
    if a.api_key.is_none() {
        a.api_key = b.api_key;
    }
    if a.timeout_secs.is_none() {
        a.timeout_secs = b.timeout_secs;
    }
    if a.delay_ms.is_none() {
        a.delay_ms = b.delay_ms;
    }
    a
}
