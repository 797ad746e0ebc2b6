use locsync_core::{Leaf, Node, TreePath};
use locsync_domain::DiffClass;

/// Classification of one source leaf against the target document.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub path: TreePath,
    pub source: Leaf,
    pub target: Option<Leaf>,
    pub class: DiffClass,
}

/// Compare a source tree and a target tree path by path.
///
/// Only source leaves are visited; the source document is authoritative for
/// the key set, and target-only keys produce no entries. Output order is the
/// source's flattened traversal order, so it is stable across runs.
///
/// The Untranslated class is a heuristic: a byte-identical non-blank string
/// in both documents is presumed "never translated". Short tokens and proper
/// nouns whose translation legitimately equals the source will false-positive
/// here; that behavior is inherited, not a bug to patch.
pub fn diff(source: &Node, target: &Node) -> Vec<ClassEntry> {
    let mut entries = Vec::new();
    for (path, src_leaf) in source.flatten() {
        let found = target.resolve(&path);
        let class = match found {
            None => DiffClass::Missing,
            Some(trg_leaf) => match (src_leaf.as_str(), trg_leaf.as_str()) {
                (Some(s), Some(t)) if s == t && !s.trim().is_empty() => DiffClass::Untranslated,
                // Different strings, or non-string leaves present on both
                // sides: presence alone counts, equality is not consulted.
                _ => DiffClass::Translated,
            },
        };
        entries.push(ClassEntry {
            path,
            source: src_leaf.clone(),
            target: found.cloned(),
            class,
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> Node {
        serde_json::from_str(json).expect("test document should parse")
    }

    fn classes(entries: &[ClassEntry]) -> Vec<(String, DiffClass)> {
        entries
            .iter()
            .map(|e| (e.path.to_string(), e.class))
            .collect()
    }

    #[test]
    fn classifies_missing_untranslated_translated() {
        let source = doc(r#"{"msg": "Save", "title": "Home", "extra": "New"}"#);
        let target = doc(r#"{"msg": "Save", "title": "Accueil"}"#);
        let entries = diff(&source, &target);
        assert_eq!(
            classes(&entries),
            vec![
                ("msg".to_string(), DiffClass::Untranslated),
                ("title".to_string(), DiffClass::Translated),
                ("extra".to_string(), DiffClass::Missing),
            ]
        );
    }

    #[test]
    fn target_only_keys_produce_no_entries() {
        let source = doc(r#"{"a": "x"}"#);
        let target = doc(r#"{"a": "y", "dead": "kept elsewhere"}"#);
        let entries = diff(&source, &target);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path.to_string(), "a");
    }

    #[test]
    fn equal_non_string_leaves_are_translated_not_untranslated() {
        let source = doc(r#"{"n": 3, "flag": true, "tags": ["a", "b"]}"#);
        let target = doc(r#"{"n": 3, "flag": true, "tags": ["a", "b"]}"#);
        for e in diff(&source, &target) {
            assert_eq!(e.class, DiffClass::Translated, "{}", e.path);
        }
    }

    #[test]
    fn equal_blank_strings_are_not_untranslated() {
        let source = doc(r#"{"pad": "  "}"#);
        let target = doc(r#"{"pad": "  "}"#);
        assert_eq!(diff(&source, &target)[0].class, DiffClass::Translated);
    }

    #[test]
    fn path_through_target_leaf_counts_as_missing() {
        let source = doc(r#"{"a": {"b": "deep"}}"#);
        let target = doc(r#"{"a": "flat"}"#);
        assert_eq!(diff(&source, &target)[0].class, DiffClass::Missing);
    }

    #[test]
    fn order_matches_source_traversal() {
        let source = doc(r#"{"z": "1", "a": {"m": "2", "b": "3"}}"#);
        let target = doc("{}");
        let paths: Vec<String> = diff(&source, &target)
            .iter()
            .map(|e| e.path.to_string())
            .collect();
        assert_eq!(paths, vec!["z", "a.m", "a.b"]);
    }
}
