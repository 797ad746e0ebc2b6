use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::path::{Segment, TreePath};

/// Ordered mapping node; key order is the order stored in the document file.
pub type Mapping = IndexMap<String, Node>;

/// Scalar element inside a list leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Str(String),
    Bool(bool),
    Num(serde_json::Number),
    Null,
}

/// Terminal document value. Lists are opaque: they are compared and copied
/// whole, never element by element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaf {
    Str(String),
    Bool(bool),
    Num(serde_json::Number),
    List(Vec<Scalar>),
    Null,
}

impl Leaf {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Leaf::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Leaf {
    fn from(s: &str) -> Self {
        Leaf::Str(s.to_string())
    }
}

/// A localization document node: an ordered-key mapping or a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Mapping(Mapping),
    Leaf(Leaf),
}

impl Node {
    /// Empty object-rooted document.
    pub fn empty() -> Node {
        Node::Mapping(Mapping::new())
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Flatten the tree into ordered `(path, leaf)` pairs, visiting mapping
    /// keys in stored order. Lists and scalars are leaves.
    pub fn flatten(&self) -> Vec<(TreePath, &Leaf)> {
        let mut out = Vec::new();
        let mut prefix = TreePath::root();
        flatten_into(self, &mut prefix, &mut out);
        out
    }

    /// Look up the leaf at `path`. Traversal through a non-mapping node or an
    /// index step finds nothing.
    pub fn resolve(&self, path: &TreePath) -> Option<&Leaf> {
        let mut cur = self;
        for seg in path.segments() {
            match (cur, seg) {
                (Node::Mapping(map), Segment::Key(k)) => cur = map.get(k)?,
                _ => return None,
            }
        }
        match cur {
            Node::Leaf(leaf) => Some(leaf),
            Node::Mapping(_) => None,
        }
    }

    /// Write `value` at `path`, creating intermediate mapping nodes as
    /// needed. An existing non-mapping node along the path is overwritten
    /// with a fresh mapping; a leaf wins over whatever subtree sat there.
    pub fn write(&mut self, path: &TreePath, value: Leaf) {
        write_at(self, path.segments(), value);
    }
}

fn write_at(node: &mut Node, segments: &[Segment], value: Leaf) {
    let Some((first, rest)) = segments.split_first() else {
        // Empty path addresses the node itself.
        *node = Node::Leaf(value);
        return;
    };
    if !node.is_mapping() {
        *node = Node::empty();
    }
    if let Node::Mapping(map) = node {
        let child = map
            .entry(first.as_key().into_owned())
            .or_insert_with(Node::empty);
        write_at(child, rest, value);
    }
}

fn flatten_into<'a>(node: &'a Node, prefix: &mut TreePath, out: &mut Vec<(TreePath, &'a Leaf)>) {
    match node {
        Node::Mapping(map) => {
            for (key, child) in map {
                prefix.push(Segment::Key(key.clone()));
                flatten_into(child, prefix, out);
                prefix.pop();
            }
        }
        Node::Leaf(leaf) => out.push((prefix.clone(), leaf)),
    }
}
