use std::time::Duration;

use locsync_backend::Translator;
use locsync_core::{policy, Leaf, Node};
use locsync_domain::{DiffClass, FailedKey, MergeSummary};

use crate::diff::diff;

#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub source_lang: String,
    pub target_lang: String,
    /// Pause inserted between successive backend calls; backpressure for
    /// third-party rate limits.
    pub delay: Duration,
}

#[derive(Debug)]
pub struct MergeOutcome {
    pub document: Node,
    pub summary: MergeSummary,
}

/// Produce a new target document covering every source key.
///
/// Distinct prior values are preserved verbatim. Missing and untranslated
/// leaves get a fresh value: the source itself when the skip policy applies
/// (or the leaf is not a string, or the string is blank), otherwise the
/// backend's translation. A backend failure writes the source value and is
/// recorded per path; it never aborts the rest of the merge. Keys present
/// only in the prior target are carried through untouched.
pub fn merge(
    source: &Node,
    prior: &Node,
    translator: &dyn Translator,
    opts: &MergeOptions,
) -> MergeOutcome {
    // Starting from the prior tree keeps target-only keys alive and keeps
    // the in-progress document loadable at every intermediate step.
    let mut document = prior.clone();
    let mut summary = MergeSummary::default();
    let mut called_backend = false;

    for entry in diff(source, prior) {
        match entry.class {
            DiffClass::Translated => {
                if let Some(existing) = entry.target {
                    document.write(&entry.path, existing);
                }
                summary.preserved += 1;
            }
            DiffClass::Missing | DiffClass::Untranslated => {
                let text = match entry.source.as_str() {
                    Some(t) => t,
                    None => {
                        // Non-string leaves pass through as-is; the policy
                        // layer only inspects strings.
                        document.write(&entry.path, entry.source.clone());
                        summary.skipped += 1;
                        continue;
                    }
                };
                if text.trim().is_empty() || policy::should_skip(text) {
                    document.write(&entry.path, entry.source.clone());
                    summary.skipped += 1;
                    continue;
                }
                if called_backend && !opts.delay.is_zero() {
                    std::thread::sleep(opts.delay);
                }
                called_backend = true;
                match translator.translate(text, &opts.source_lang, &opts.target_lang) {
                    Ok(translated) => {
                        document.write(&entry.path, Leaf::Str(translated));
                        summary.translated += 1;
                    }
                    Err(err) => {
                        tracing::warn!(
                            path = %entry.path,
                            error = %err,
                            "translation failed, keeping source value"
                        );
                        document.write(&entry.path, entry.source.clone());
                        summary.failed += 1;
                        summary.failures.push(FailedKey {
                            path: entry.path.to_string(),
                            error: err.to_string(),
                        });
                    }
                }
            }
        }
    }

    MergeOutcome { document, summary }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use locsync_backend::BackendError;
    use locsync_core::TreePath;

    use super::*;

    /// Backend stand-in with a fixed phrase table; unknown phrases fail the
    /// way a rejected request would. Records every call.
    #[derive(Debug)]
    struct FakeBackend {
        table: HashMap<&'static str, &'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn new(pairs: &[(&'static str, &'static str)]) -> Self {
            FakeBackend {
                table: pairs.iter().copied().collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Translator for FakeBackend {
        fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, BackendError> {
            self.calls.borrow_mut().push(text.to_string());
            self.table
                .get(text)
                .map(|t| t.to_string())
                .ok_or_else(|| BackendError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                })
        }
    }

    fn doc(json: &str) -> Node {
        serde_json::from_str(json).expect("test document should parse")
    }

    fn opts() -> MergeOptions {
        MergeOptions {
            source_lang: "en".to_string(),
            target_lang: "fr".to_string(),
            delay: Duration::ZERO,
        }
    }

    fn leaf_at<'a>(doc: &'a Node, path: &str) -> Option<&'a Leaf> {
        doc.resolve(&TreePath::from_dotted(path))
    }

    #[test]
    fn fills_missing_and_skips_urls() {
        // Worked example: one translatable leaf, one URL, empty prior.
        let source = doc(r#"{"a": {"b": "Hello"}, "url": "https://x.com"}"#);
        let backend = FakeBackend::new(&[("Hello", "Bonjour")]);
        let out = merge(&source, &Node::empty(), &backend, &opts());
        assert_eq!(leaf_at(&out.document, "a.b").and_then(Leaf::as_str), Some("Bonjour"));
        assert_eq!(
            leaf_at(&out.document, "url").and_then(Leaf::as_str),
            Some("https://x.com")
        );
        assert_eq!(out.summary.translated, 1);
        assert_eq!(out.summary.skipped, 1);
        assert_eq!(backend.calls.borrow().as_slice(), ["Hello"]);
    }

    #[test]
    fn untranslated_keys_are_retranslated() {
        let source = doc(r#"{"msg": "Save"}"#);
        let prior = doc(r#"{"msg": "Save"}"#);
        let backend = FakeBackend::new(&[("Save", "Enregistrer")]);
        let out = merge(&source, &prior, &backend, &opts());
        assert_eq!(
            leaf_at(&out.document, "msg").and_then(Leaf::as_str),
            Some("Enregistrer")
        );
        assert_eq!(out.summary.translated, 1);
    }

    #[test]
    fn distinct_prior_values_are_preserved() {
        let source = doc(r#"{"msg": "Save"}"#);
        let prior = doc(r#"{"msg": "Sauvegarder"}"#);
        let backend = FakeBackend::new(&[("Save", "Enregistrer")]);
        let out = merge(&source, &prior, &backend, &opts());
        assert_eq!(
            leaf_at(&out.document, "msg").and_then(Leaf::as_str),
            Some("Sauvegarder")
        );
        assert_eq!(out.summary.preserved, 1);
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn merging_a_document_against_itself_is_idempotent() {
        let source = doc(r#"{"a": "Uno", "b": {"c": "Dos"}, "n": 7}"#);
        let backend = FakeBackend::new(&[]);
        let out = merge(&source, &source, &backend, &opts());
        assert_eq!(out.document, source);
        // Non-blank equal strings reclassify as untranslated, so true
        // idempotence needs distinct target values; with identical trees the
        // string leaves go back through the backend. Use a prior with
        // distinct values to assert the preserved-only property instead.
        let prior = doc(r#"{"a": "Eins", "b": {"c": "Zwei"}, "n": 7}"#);
        let out = merge(&source, &prior, &backend, &opts());
        assert_eq!(out.summary.preserved, 3);
        assert_eq!(out.summary.translated, 0);
        assert_eq!(out.summary.failed, 0);
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn merge_is_total_over_the_source_key_set() {
        let source = doc(
            r#"{"s": "Word", "blank": " ", "num": 5, "list": [1, 2], "null": null,
                "ph": "{{x}}", "deep": {"leaf": "Other"}}"#,
        );
        // Backend knows nothing: every call fails.
        let backend = FakeBackend::new(&[]);
        let out = merge(&source, &Node::empty(), &backend, &opts());
        for (path, _) in source.flatten() {
            assert!(
                out.document.resolve(&path).is_some(),
                "missing merged value at {path}"
            );
        }
        assert_eq!(out.summary.total(), source.flatten().len());
    }

    #[test]
    fn backend_failure_writes_source_and_continues() {
        let source = doc(r#"{"bad": "Unknown", "good": "Hello"}"#);
        let backend = FakeBackend::new(&[("Hello", "Bonjour")]);
        let out = merge(&source, &Node::empty(), &backend, &opts());
        assert_eq!(
            leaf_at(&out.document, "bad").and_then(Leaf::as_str),
            Some("Unknown")
        );
        assert_eq!(
            leaf_at(&out.document, "good").and_then(Leaf::as_str),
            Some("Bonjour")
        );
        assert_eq!(out.summary.failed, 1);
        assert_eq!(out.summary.translated, 1);
        assert_eq!(out.summary.failures[0].path, "bad");
        // The failure did not short-circuit the later call.
        assert_eq!(backend.calls.borrow().len(), 2);
    }

    #[test]
    fn blank_strings_pass_through_without_backend_calls() {
        let source = doc(r#"{"pad": "   ", "empty": ""}"#);
        let backend = FakeBackend::new(&[]);
        let out = merge(&source, &Node::empty(), &backend, &opts());
        assert_eq!(leaf_at(&out.document, "pad").and_then(Leaf::as_str), Some("   "));
        assert_eq!(out.summary.skipped, 2);
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn target_only_keys_survive_the_merge() {
        let source = doc(r#"{"a": "Hello"}"#);
        let prior = doc(r#"{"a": "Bonjour", "legacy": {"kept": "oui"}}"#);
        let backend = FakeBackend::new(&[]);
        let out = merge(&source, &prior, &backend, &opts());
        assert_eq!(
            leaf_at(&out.document, "legacy.kept").and_then(Leaf::as_str),
            Some("oui")
        );
    }
}
