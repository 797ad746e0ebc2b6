//! Core data model for locsync: the localization document tree, dotted-path
//! addressing, and the translation skip policy.
//!
//! Everything here is pure and synchronous; storage and backends live in
//! higher-level crates.

pub mod path;
pub mod policy;
pub mod tree;

pub use path::{Segment, TreePath};
pub use tree::{Leaf, Mapping, Node, Scalar};

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;
