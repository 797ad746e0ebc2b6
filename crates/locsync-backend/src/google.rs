use std::time::Duration;

use crate::{build_client, BackendError, Translator};

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the unauthenticated Google Translate web endpoint. Language
/// codes are the two-letter lowercase pair codes ("en", "ar", ...).
#[derive(Debug)]
pub struct GoogleTranslate {
    client: reqwest::blocking::Client,
}

impl GoogleTranslate {
    pub fn new(timeout: Duration) -> Result<Self, BackendError> {
        Ok(GoogleTranslate {
            client: build_client(timeout)?,
        })
    }
}

impl Translator for GoogleTranslate {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError> {
        let resp = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        // Body shape: [[["<translated>", "<original>", ...], ...], ...].
        // Long inputs come back split into several segments; concatenate them.
        let body: serde_json::Value = resp.json()?;
        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| BackendError::Malformed("missing segment array".to_string()))?;
        let mut out = String::new();
        for seg in segments {
            if let Some(chunk) = seg.get(0).and_then(|v| v.as_str()) {
                out.push_str(chunk);
            }
        }
        if out.is_empty() {
            return Err(BackendError::Malformed("empty translation".to_string()));
        }
        tracing::debug!(target_lang, chars = text.len(), "google translate ok");
        Ok(out)
    }
}
