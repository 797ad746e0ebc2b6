use std::path::{Path, PathBuf};

use locsync_core::Node;

/// Document storage failures. Source-side read/parse errors abort an
/// operation; target reads degrade to an empty document instead.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load a document tree from a UTF-8 JSON file.
pub fn load_document(path: &Path) -> Result<Node, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a target document, treating a missing or unreadable file as an
/// empty tree. Gaps will be refilled by the merge; nothing to abort over.
pub fn load_target_or_empty(path: &Path) -> Node {
    match load_document(path) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "target not loaded, starting empty");
            Node::empty()
        }
    }
}

/// Persist a document, creating parent directories as needed. With `backup`
/// an existing file is first copied to `<name>.json.bak`.
///
/// Output is pretty-printed with a trailing newline; non-ASCII characters
/// are written literally so untouched leaves round-trip byte-for-byte.
pub fn save_document(path: &Path, doc: &Node, backup: bool) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Persist {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    if backup && path.exists() {
        let bak = path.with_extension("json.bak");
        std::fs::copy(path, &bak).map_err(|source| StoreError::Persist {
            path: bak.clone(),
            source,
        })?;
        tracing::warn!(from = %path.display(), to = %bak.display(), "backup written");
    }
    let mut text = serde_json::to_string_pretty(doc).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    })
}
