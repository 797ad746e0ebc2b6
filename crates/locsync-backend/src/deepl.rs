use std::time::Duration;

use serde::Deserialize;

use crate::{build_client, BackendError, Translator};

const ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// DeepL's upper-case language code table for the languages the sync
/// pipeline targets; anything else falls back to plain upper-casing.
const LANG_CODES: [(&str, &str); 7] = [
    ("ar", "AR"),
    ("vi", "VI"),
    ("th", "TH"),
    ("en", "EN"),
    ("zh", "ZH"),
    ("ja", "JA"),
    ("ko", "KO"),
];

fn deepl_lang(code: &str) -> String {
    LANG_CODES
        .iter()
        .find(|(from, _)| *from == code)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

#[derive(Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Deserialize)]
struct DeepLTranslation {
    text: String,
}

/// Client for the DeepL REST API (free tier endpoint). Requires an API key.
#[derive(Debug)]
pub struct DeepLTranslate {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl DeepLTranslate {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, BackendError> {
        Ok(DeepLTranslate {
            client: build_client(timeout)?,
            api_key,
        })
    }
}

impl Translator for DeepLTranslate {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError> {
        let source = deepl_lang(source_lang);
        let target = deepl_lang(target_lang);
        let params = [
            ("auth_key", self.api_key.as_str()),
            ("text", text),
            ("source_lang", source.as_str()),
            ("target_lang", target.as_str()),
            ("preserve_formatting", "1"),
        ];
        let resp = self.client.post(ENDPOINT).form(&params).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        let body: DeepLResponse = resp.json()?;
        let translation = body
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Malformed("no translations in response".to_string()))?;
        tracing::debug!(target_lang, chars = text.len(), "deepl translate ok");
        Ok(translation.text)
    }
}

#[cfg(test)]
mod tests {
    use super::deepl_lang;

    #[test]
    fn maps_known_codes_and_uppercases_the_rest() {
        assert_eq!(deepl_lang("ar"), "AR");
        assert_eq!(deepl_lang("ja"), "JA");
        assert_eq!(deepl_lang("pt"), "PT");
    }
}
