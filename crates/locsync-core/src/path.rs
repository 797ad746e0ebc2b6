use std::borrow::Cow;
use std::fmt;

/// One step of a document path: a mapping key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Mapping-key form of the segment, used when writing through a path.
    /// Index segments keep their bracketed rendering as a literal key.
    pub(crate) fn as_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(k) => Cow::Borrowed(k.as_str()),
            Segment::Index(i) => Cow::Owned(format!("[{i}]")),
        }
    }
}

/// Root-to-leaf address inside a document, rendered as `a.b[2].c`.
///
/// A path addresses at most one leaf; resolving it through a node that is
/// not a mapping yields "not found", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TreePath(Vec<Segment>);

impl TreePath {
    pub fn root() -> Self {
        TreePath(Vec::new())
    }

    /// Build a path from a dotted key string (`"a.b.c"`). Keys only; this is
    /// the form reports and CLI arguments use.
    pub fn from_dotted(s: &str) -> Self {
        if s.is_empty() {
            return TreePath::root();
        }
        TreePath(s.split('.').map(|k| Segment::Key(k.to_string())).collect())
    }

    pub fn push(&mut self, seg: Segment) {
        self.0.push(seg);
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.0 {
            match seg {
                Segment::Key(k) => {
                    if !first {
                        write!(f, ".")?;
                    }
                    write!(f, "{k}")?;
                }
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
            first = false;
        }
        Ok(())
    }
}
