//! Translation backends consumed by the merge engine.
//!
//! The core is agnostic to which backend is plugged in; it only sees the
//! [`Translator`] trait. Backend selection and credential checks happen once
//! at construction, not per call.

use std::str::FromStr;
use std::time::Duration;

mod deepl;
mod google;

pub use deepl::DeepLTranslate;
pub use google::GoogleTranslate;

/// Default per-request timeout, matching the DeepL recommendation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default pause between successive translate calls.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend rejected request: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("malformed backend response: {0}")]
    Malformed(String),
    #[error("backend '{kind}' requires an API key")]
    MissingApiKey { kind: String },
    #[error("unknown backend kind '{0}' (expected 'google' or 'deepl')")]
    UnknownKind(String),
}

/// Synchronous translation call; blocks on network I/O with a bounded
/// timeout. Errors never carry partial translations.
pub trait Translator: std::fmt::Debug {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Google,
    DeepL,
}

impl FromStr for BackendKind {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(BackendKind::Google),
            "deepl" => Ok(BackendKind::DeepL),
            other => Err(BackendError::UnknownKind(other.to_string())),
        }
    }
}

/// Explicit backend capability configuration. Validated when the client is
/// built, so a missing credential fails at startup instead of mid-merge.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(kind: BackendKind) -> Self {
        BackendConfig {
            kind,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration and build a ready-to-use client.
    pub fn build(self) -> Result<Box<dyn Translator>, BackendError> {
        match self.kind {
            BackendKind::Google => Ok(Box::new(GoogleTranslate::new(self.timeout)?)),
            BackendKind::DeepL => {
                let key = self.api_key.ok_or_else(|| BackendError::MissingApiKey {
                    kind: "deepl".to_string(),
                })?;
                Ok(Box::new(DeepLTranslate::new(key, self.timeout)?))
            }
        }
    }
}

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, BackendError> {
    Ok(reqwest::blocking::Client::builder()
        .user_agent("locsync/cli")
        .timeout(timeout)
        .build()?)
}
